use async_trait::async_trait;
use ens_gateway_application::ports::ParameterStore;
use ens_gateway_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use super::{MAPPINGS_JSON, TEST_PRIVATE_KEY};

#[derive(Default)]
pub struct MockParameterStore {
    values: RwLock<HashMap<String, String>>,
    should_fail: RwLock<bool>,
    delay: RwLock<Option<Duration>>,
    calls: AtomicUsize,
}

impl MockParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated the way a deployment provisions it.
    pub fn provisioned() -> Self {
        let store = Self::new();
        store.set("/offchain-ens-resolver/PrivateKey", TEST_PRIVATE_KEY);
        store.set("/offchain-ens-resolver/RpcUrl", "http://localhost:8545");
        store.set("/offchain-ens-resolver/ContractMappings", MAPPINGS_JSON);
        store
    }

    pub fn set(&self, name: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        self.values.write().unwrap().remove(name);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ParameterStore for MockParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<Option<String>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::ConfigError("parameter store unavailable".to_string()));
        }
        Ok(self.values.read().unwrap().get(name).cloned())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
