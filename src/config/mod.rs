//! Configuration management for the client
//!
//! Configuration comes from an optional YAML file, then environment
//! variables (a `.env` file is honoured), and is validated before use.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable names
pub const ENV_API_URL: &str = "NUTRICARE_API_URL";
pub const ENV_TIMEOUT: &str = "NUTRICARE_TIMEOUT";
pub const ENV_SESSION_FILE: &str = "NUTRICARE_SESSION_FILE";
pub const ENV_LOG_LEVEL: &str = "NUTRICARE_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "NUTRICARE_LOG_JSON";

/// Main configuration struct for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Credential persistence
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with every other setting defaulted
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClientError::config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ClientError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let config = Self::default().with_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration: file (if given) or defaults,
    /// then environment overrides, then validation
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let base = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        let config = base.with_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides read through `lookup`; empty values are ignored
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(timeout) = get(ENV_TIMEOUT) {
            self.api.timeout = timeout
                .trim()
                .parse()
                .map_err(|e| ClientError::config(format!("Invalid {}: {}", ENV_TIMEOUT, e)))?;
        }
        if let Some(path) = get(ENV_SESSION_FILE) {
            self.session = SessionConfig::file(path);
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(json) = get(ENV_LOG_JSON) {
            self.logging.json = matches!(json.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(self)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.api.validate()?;
        self.session.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ClientError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
