use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// ENS registry deployment shared by mainnet and the public testnets.
pub const DEFAULT_ENS_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Validity window, in seconds, stamped on every signed response
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default = "default_rpc_timeout_ms")]
    pub rpc_timeout_ms: u64,

    #[serde(default = "default_ens_registry")]
    pub ens_registry: Address,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            rpc_timeout_ms: default_rpc_timeout_ms(),
            ens_registry: default_ens_registry(),
        }
    }
}

fn default_ttl() -> u32 {
    300
}

fn default_rpc_timeout_ms() -> u64 {
    5_000
}

fn default_ens_registry() -> Address {
    DEFAULT_ENS_REGISTRY
}
