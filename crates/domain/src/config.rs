pub mod errors;
pub mod gateway;
pub mod logging;
pub mod parameters;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use gateway::GatewayConfig;
pub use logging::LoggingConfig;
pub use parameters::{ParameterSource, ParametersConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
