use clap::Parser;
use ens_gateway_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ens-gateway")]
#[command(version)]
#[command(about = "CCIP-Read gateway that answers ENS lookups for NFT-backed subdomains")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Read parameters from this JSON file instead of the environment
    #[arg(long, value_name = "FILE")]
    parameters_file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        parameters_file: cli.parameters_file.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting ENS gateway v{}", env!("CARGO_PKG_VERSION"));

    let services = di::GatewayServices::new(&config)?;

    let bind_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    server::start_web_server(bind_addr, services.app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
