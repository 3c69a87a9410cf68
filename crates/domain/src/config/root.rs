use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::session::SessionConfig;

/// Main configuration structure for dnslook
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolver discovery and query settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Interactive session settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnslook.toml in current directory
    /// 3. /etc/dnslook/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dnslook.toml").exists() {
            Self::from_file("dnslook.toml")?
        } else if std::path::Path::new("/etc/dnslook/config.toml").exists() {
            Self::from_file("/etc/dnslook/config.toml")?
        } else {
            Self::default()
        };

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

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.resolver.server = Some(server);
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.query_timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.fallback_servers.is_empty() {
            return Err(ConfigError::Validation(
                "At least one fallback server is required".to_string(),
            ));
        }

        if let Some(server) = &self.resolver.server {
            if server.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Server override cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
