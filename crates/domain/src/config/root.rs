use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::gateway::GatewayConfig;
use super::logging::LoggingConfig;
use super::parameters::{ParameterSource, ParametersConfig};
use super::server::ServerConfig;

/// Main configuration structure for the ENS gateway
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Resolution and signing behaviour
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Source of the signing key, RPC URL and contract mappings
    #[serde(default)]
    pub parameters: ParametersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ens-gateway.toml in current directory
    /// 3. /etc/ens-gateway/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ens-gateway.toml").exists() {
            Self::from_file("ens-gateway.toml")?
        } else if std::path::Path::new("/etc/ens-gateway/config.toml").exists() {
            Self::from_file("/etc/ens-gateway/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.parameters_file {
            self.parameters.source = ParameterSource::File;
            self.parameters.file = Some(file);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        if self.gateway.rpc_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "RPC timeout cannot be 0".to_string(),
            ));
        }

        if self.parameters.source == ParameterSource::File && self.parameters.file.is_none() {
            return Err(ConfigError::Validation(
                "Parameter source 'file' requires parameters.file".to_string(),
            ));
        }

        if self.parameters.prefix.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "Parameter prefix '{}' must not end with '/'",
                self.parameters.prefix
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub parameters_file: Option<String>,
}
