use async_trait::async_trait;
use ens_gateway_application::ports::ParameterStore;
use ens_gateway_domain::DomainError;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Parameters from a JSON object file, read once at construction.
///
/// ```json
/// {
///   "/offchain-ens-resolver/PrivateKey": "0x...",
///   "/offchain-ens-resolver/RpcUrl": "https://...",
///   "/offchain-ens-resolver/ContractMappings": { "foo.eth": { "contractAddress": "0x..." } }
/// }
/// ```
///
/// String values are returned as-is; anything else is returned as its JSON
/// text. `null` counts as absent.
#[derive(Debug, Clone)]
pub struct FileParameterStore {
    values: HashMap<String, String>,
}

impl FileParameterStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigError(format!(
                "Failed to read parameters file {}: {}",
                path.display(),
                e
            ))
        })?;

        let store = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            parameters = store.values.len(),
            "Parameters file loaded"
        );
        Ok(store)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let object: serde_json::Map<String, Value> = serde_json::from_str(json).map_err(|e| {
            DomainError::ConfigError(format!("Parameters file must be a JSON object: {}", e))
        })?;

        let values = object
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect();

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl ParameterStore for FileParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<Option<String>, DomainError> {
        Ok(self.values.get(name).cloned())
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
