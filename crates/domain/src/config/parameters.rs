use serde::{Deserialize, Serialize};

pub const DEFAULT_PARAMETER_PREFIX: &str = "/offchain-ens-resolver";

/// Where the signing key, RPC endpoint and contract mappings are read from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSource {
    #[default]
    Env,

    File,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParametersConfig {
    #[serde(default)]
    pub source: ParameterSource,

    /// JSON parameter file, required when `source = "file"`
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            source: ParameterSource::default(),
            file: None,
            prefix: default_prefix(),
        }
    }
}

impl ParametersConfig {
    pub fn private_key_name(&self) -> String {
        format!("{}/PrivateKey", self.prefix)
    }

    pub fn rpc_url_name(&self) -> String {
        format!("{}/RpcUrl", self.prefix)
    }

    pub fn contract_mappings_name(&self) -> String {
        format!("{}/ContractMappings", self.prefix)
    }
}

fn default_prefix() -> String {
    DEFAULT_PARAMETER_PREFIX.to_string()
}
