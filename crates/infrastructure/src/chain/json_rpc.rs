//! `eth_call` reads through an alloy provider.
//!
//! Calls are ABI-encoded with the `sol!` bindings, sent at the `latest`
//! block over the shared HTTP client and decoded with the same binding.

use alloy::eips::BlockId;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use alloy::transports::http::Http;
use async_trait::async_trait;
use ens_gateway_application::ports::{ChainConnector, ChainReader};
use ens_gateway_domain::abi::{IENSRegistry, IERC721};
use ens_gateway_domain::DomainError;
use reqwest::Url;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

pub struct JsonRpcChainReader {
    provider: RootProvider,
    registry: Address,
    timeout: Duration,
}

impl JsonRpcChainReader {
    pub fn new(url: Url, registry: Address, timeout: Duration) -> Self {
        let transport = Http::with_client(SHARED_CLIENT.clone(), url);
        Self {
            provider: RootProvider::new(RpcClient::new(transport, false)),
            registry,
            timeout,
        }
    }

    async fn call<C: SolCall>(&self, to: Address, call: &C) -> Result<C::Return, DomainError> {
        let tx = TransactionRequest::default()
            .with_to(to)
            .with_input(call.abi_encode());

        debug!(to = %to, function = C::SIGNATURE, "Sending eth_call");

        let output = tokio::time::timeout(
            self.timeout,
            self.provider.call(tx).block(BlockId::latest()),
        )
        .await
        .map_err(|_| {
            DomainError::Upstream(format!(
                "{} on {} timed out after {}ms",
                C::SIGNATURE,
                to,
                self.timeout.as_millis()
            ))
        })?
        .map_err(|e| DomainError::Upstream(format!("{} on {} failed: {}", C::SIGNATURE, to, e)))?;

        C::abi_decode_returns(&output).map_err(|e| {
            DomainError::Upstream(format!("{} returned undecodable data: {}", C::SIGNATURE, e))
        })
    }
}

#[async_trait]
impl ChainReader for JsonRpcChainReader {
    async fn owner_of(&self, contract: Address, token_id: U256) -> Result<Address, DomainError> {
        self.call(contract, &IERC721::ownerOfCall { tokenId: token_id })
            .await
    }

    async fn registry_owner(&self, node: B256) -> Result<Address, DomainError> {
        self.call(self.registry, &IENSRegistry::ownerCall { node })
            .await
    }
}

/// Creates [`JsonRpcChainReader`]s for the RPC URL found in the parameter store.
pub struct JsonRpcConnector {
    registry: Address,
    timeout: Duration,
}

impl JsonRpcConnector {
    pub fn new(registry: Address, timeout: Duration) -> Self {
        Self { registry, timeout }
    }
}

impl ChainConnector for JsonRpcConnector {
    fn connect(&self, rpc_url: &str) -> Result<Arc<dyn ChainReader>, DomainError> {
        let url = Url::parse(rpc_url)
            .map_err(|e| DomainError::ConfigError(format!("Invalid RPC URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::ConfigError(format!(
                "Unsupported RPC URL scheme: {}",
                url.scheme()
            )));
        }

        Ok(Arc::new(JsonRpcChainReader::new(
            url,
            self.registry,
            self.timeout,
        )))
    }
}
