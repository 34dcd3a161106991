use serde::{Deserialize, Serialize};

use super::dashboard::DashboardConfig;
use super::errors::ConfigError;
use super::heartbeat::HeartbeatConfig;
use super::logging::LoggingConfig;
use super::query_log::QueryLogConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;

pub const ENV_HEARTBEAT_ADDRESS: &str = "HEARTBEAT_ADDRESS";
pub const ENV_LISTENING_ADDRESS: &str = "LISTENING_ADDRESS";

const DEFAULT_CONFIG_FILE: &str = "iplookup.toml";

/// Main configuration structure for iplookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Liveness reporter configuration
    #[serde(default)]
    pub heartbeat: HeartbeatConfig,

    /// Name resolution configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Query log configuration
    #[serde(default)]
    pub query_log: QueryLogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub listening_address: Option<String>,
    pub heartbeat_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration
    ///
    /// Priority order (later wins):
    /// 1. Defaults
    /// 2. Explicitly provided path, or iplookup.toml in current directory
    /// 3. `HEARTBEAT_ADDRESS` / `LISTENING_ADDRESS` environment variables
    /// 4. Command line overrides
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment overrides. Variables that are unset or blank are
    /// ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(address) = non_blank(ENV_HEARTBEAT_ADDRESS) {
            self.heartbeat.address = address;
        }
        if let Some(address) = non_blank(ENV_LISTENING_ADDRESS) {
            self.server.listening_address = address;
        }
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(address) = overrides.listening_address {
            self.server.listening_address = address;
        }
        if let Some(address) = overrides.heartbeat_address {
            self.heartbeat.address = address;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.listening_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Listening address cannot be empty".to_string(),
            ));
        }

        if self.server.port().is_none() {
            return Err(ConfigError::Validation(format!(
                "Listening address '{}' has no valid port",
                self.server.listening_address
            )));
        }

        if self.heartbeat.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Heartbeat interval cannot be 0".to_string(),
            ));
        }

        if self.heartbeat.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Heartbeat timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if !self.logging.is_known_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
