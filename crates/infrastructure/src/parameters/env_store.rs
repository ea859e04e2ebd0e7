use async_trait::async_trait;
use ens_gateway_application::ports::ParameterStore;
use ens_gateway_domain::DomainError;
use std::env::VarError;
use tracing::debug;

/// Reads parameters from process environment variables.
///
/// Parameter paths map onto variable names; see [`env_var_name`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvParameterStore;

impl EnvParameterStore {
    pub fn new() -> Self {
        Self
    }
}

/// `/offchain-ens-resolver/PrivateKey` becomes `OFFCHAIN_ENS_RESOLVER_PRIVATE_KEY`.
pub fn env_var_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev: Option<char> = None;

    for c in name.trim_start_matches('/').chars() {
        match c {
            '/' | '-' | '.' | ' ' => {
                if !out.ends_with('_') {
                    out.push('_');
                }
            }
            c if c.is_ascii_uppercase() => {
                if matches!(prev, Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit()) {
                    out.push('_');
                }
                out.push(c);
            }
            c => out.push(c.to_ascii_uppercase()),
        }
        prev = Some(c);
    }

    out
}

#[async_trait]
impl ParameterStore for EnvParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<Option<String>, DomainError> {
        let var = env_var_name(name);
        match std::env::var(&var) {
            Ok(value) => {
                debug!(parameter = name, variable = %var, "Parameter read from environment");
                Ok(Some(value))
            }
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(DomainError::ConfigError(format!(
                "environment variable {} is not valid UTF-8",
                var
            ))),
        }
    }

    fn source_name(&self) -> &'static str {
        "env"
    }
}
