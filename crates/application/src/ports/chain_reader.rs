use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use ens_gateway_domain::DomainError;
use std::sync::Arc;

/// Read-only view of the contracts the gateway consults.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// ERC-721 `ownerOf(tokenId)` on `contract`.
    async fn owner_of(&self, contract: Address, token_id: U256) -> Result<Address, DomainError>;

    /// ENS registry `owner(node)`.
    async fn registry_owner(&self, node: B256) -> Result<Address, DomainError>;
}

/// Builds a [`ChainReader`] once the RPC endpoint is known.
pub trait ChainConnector: Send + Sync {
    fn connect(&self, rpc_url: &str) -> Result<Arc<dyn ChainReader>, DomainError>;
}
