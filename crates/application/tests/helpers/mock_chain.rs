use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use ens_gateway_application::ports::{ChainConnector, ChainReader};
use ens_gateway_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Default)]
pub struct MockChainReader {
    owners: RwLock<HashMap<(Address, U256), Address>>,
    registry: RwLock<HashMap<B256, Address>>,
    registry_fails: RwLock<bool>,
    owner_of_fails: RwLock<bool>,
    owner_of_calls: AtomicUsize,
    registry_calls: AtomicUsize,
}

impl MockChainReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_owner(&self, contract: Address, token_id: u64, owner: Address) {
        self.owners
            .write()
            .unwrap()
            .insert((contract, U256::from(token_id)), owner);
    }

    pub fn set_registry_owner(&self, node: B256, owner: Address) {
        self.registry.write().unwrap().insert(node, owner);
    }

    pub fn set_registry_fails(&self, fails: bool) {
        *self.registry_fails.write().unwrap() = fails;
    }

    pub fn set_owner_of_fails(&self, fails: bool) {
        *self.owner_of_fails.write().unwrap() = fails;
    }

    pub fn owner_of_calls(&self) -> usize {
        self.owner_of_calls.load(Ordering::SeqCst)
    }

    pub fn registry_calls(&self) -> usize {
        self.registry_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    async fn owner_of(&self, contract: Address, token_id: U256) -> Result<Address, DomainError> {
        self.owner_of_calls.fetch_add(1, Ordering::SeqCst);
        if *self.owner_of_fails.read().unwrap() {
            return Err(DomainError::Upstream(
                "execution reverted: ERC721: invalid token ID".to_string(),
            ));
        }
        self.owners
            .read()
            .unwrap()
            .get(&(contract, token_id))
            .copied()
            .ok_or_else(|| DomainError::Upstream("execution reverted".to_string()))
    }

    async fn registry_owner(&self, node: B256) -> Result<Address, DomainError> {
        self.registry_calls.fetch_add(1, Ordering::SeqCst);
        if *self.registry_fails.read().unwrap() {
            return Err(DomainError::Upstream("connection refused".to_string()));
        }
        Ok(self
            .registry
            .read()
            .unwrap()
            .get(&node)
            .copied()
            .unwrap_or(Address::ZERO))
    }
}

pub struct MockChainConnector {
    reader: Arc<MockChainReader>,
    connected_urls: RwLock<Vec<String>>,
}

impl MockChainConnector {
    pub fn new(reader: Arc<MockChainReader>) -> Self {
        Self {
            reader,
            connected_urls: RwLock::new(Vec::new()),
        }
    }

    pub fn connected_urls(&self) -> Vec<String> {
        self.connected_urls.read().unwrap().clone()
    }
}

impl ChainConnector for MockChainConnector {
    fn connect(&self, rpc_url: &str) -> Result<Arc<dyn ChainReader>, DomainError> {
        self.connected_urls.write().unwrap().push(rpc_url.to_string());
        Ok(self.reader.clone())
    }
}
