use ens_gateway_api::AppState;
use ens_gateway_application::ports::{ChainConnector, ParameterStore};
use ens_gateway_application::services::GatewayContextCache;
use ens_gateway_application::use_cases::ResolveCallUseCase;
use ens_gateway_domain::config::ParameterSource;
use ens_gateway_domain::Config;
use ens_gateway_infrastructure::chain::JsonRpcConnector;
use ens_gateway_infrastructure::parameters::{EnvParameterStore, FileParameterStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct GatewayServices {
    pub app_state: AppState,
}

impl GatewayServices {
    /// Wires the gateway. Parameters are not read here; the first request
    /// loads them.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store = build_parameter_store(config)?;
        let connector: Arc<dyn ChainConnector> = Arc::new(JsonRpcConnector::new(
            config.gateway.ens_registry,
            Duration::from_millis(config.gateway.rpc_timeout_ms),
        ));

        info!(
            source = store.source_name(),
            prefix = %config.parameters.prefix,
            registry = %config.gateway.ens_registry,
            ttl = config.gateway.ttl,
            "Gateway services configured"
        );

        let context = Arc::new(GatewayContextCache::new(
            store,
            connector,
            config.parameters.clone(),
            config.gateway.ttl,
        ));

        Ok(Self {
            app_state: AppState {
                resolve_call: Arc::new(ResolveCallUseCase::new(context)),
                request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            },
        })
    }
}

fn build_parameter_store(config: &Config) -> anyhow::Result<Arc<dyn ParameterStore>> {
    match config.parameters.source {
        ParameterSource::Env => Ok(Arc::new(EnvParameterStore::new())),
        ParameterSource::File => {
            let path = config
                .parameters
                .file
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("parameters.file is required for file source"))?;
            Ok(Arc::new(FileParameterStore::load(path)?))
        }
    }
}
