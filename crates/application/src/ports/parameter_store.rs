use async_trait::async_trait;
use ens_gateway_domain::DomainError;

/// Key/value source for gateway secrets and settings.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Returns `Ok(None)` when the parameter does not exist.
    async fn get_parameter(&self, name: &str) -> Result<Option<String>, DomainError>;

    fn source_name(&self) -> &'static str;
}
