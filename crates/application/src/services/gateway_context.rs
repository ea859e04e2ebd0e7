use super::{RecordResolver, ResponseSigner};
use crate::ports::{ChainConnector, ParameterStore};
use ens_gateway_domain::config::ParametersConfig;
use ens_gateway_domain::{ContractMappings, DomainError};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

/// Process-wide state derived from the parameter store.
pub struct GatewayContext {
    pub signer: ResponseSigner,
    pub resolver: RecordResolver,
}

/// Loads the [`GatewayContext`] on first use and shares it afterwards.
///
/// Concurrent first requests wait on a single load instead of each hitting
/// the parameter store. A failed load leaves the cell empty, so the next
/// request tries again.
pub struct GatewayContextCache {
    store: Arc<dyn ParameterStore>,
    connector: Arc<dyn ChainConnector>,
    parameters: ParametersConfig,
    ttl: u32,
    context: OnceCell<Arc<GatewayContext>>,
}

impl GatewayContextCache {
    pub fn new(
        store: Arc<dyn ParameterStore>,
        connector: Arc<dyn ChainConnector>,
        parameters: ParametersConfig,
        ttl: u32,
    ) -> Self {
        Self {
            store,
            connector,
            parameters,
            ttl,
            context: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<Arc<GatewayContext>, DomainError> {
        self.context
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.context.initialized()
    }

    #[instrument(skip(self), fields(source = self.store.source_name()))]
    async fn load(&self) -> Result<Arc<GatewayContext>, DomainError> {
        let key_name = self.parameters.private_key_name();
        let rpc_name = self.parameters.rpc_url_name();
        let mappings_name = self.parameters.contract_mappings_name();

        let (private_key, rpc_url, mappings_json) = tokio::try_join!(
            self.store.get_parameter(&key_name),
            self.store.get_parameter(&rpc_name),
            self.store.get_parameter(&mappings_name),
        )?;

        let private_key = private_key
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| DomainError::Signing(format!("parameter {} is not set", key_name)))?;
        let signer = ResponseSigner::from_hex(&private_key)?;

        let rpc_url = rpc_url
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                DomainError::ConfigError(format!("parameter {} is not set", rpc_name))
            })?;
        let chain = self.connector.connect(rpc_url.trim())?;

        let mappings = match mappings_json {
            Some(json) if !json.trim().is_empty() => ContractMappings::from_json(&json)?,
            _ => ContractMappings::default(),
        };

        info!(
            signer = %signer.address(),
            domains = mappings.len(),
            ttl = self.ttl,
            "Gateway context loaded"
        );

        Ok(Arc::new(GatewayContext {
            signer,
            resolver: RecordResolver::new(chain, Arc::new(mappings), self.ttl),
        }))
    }
}
