//! Application configuration
//!
//! Loaded once at startup from an optional TOML file plus
//! `PHARMDASH_`-prefixed environment overrides. Everything has a default;
//! a missing file is a normal first run.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Storage base directory; resolved via the storage path rules when
    /// unset
    pub base_dir: Option<PathBuf>,
    /// Upper bound on waiting for session restoration at startup
    pub hydration_timeout_ms: u64,
    /// Simulated credential-lookup latency of the bundled directory
    pub login_latency_ms: u64,
    /// Log filter directive passed to logging setup
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            hydration_timeout_ms: 50,
            login_latency_ms: 250,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Validate the loaded values
    pub fn validate(&self) -> AppResult<()> {
        if self.hydration_timeout_ms == 0 {
            return Err(AppError::Validation(
                "hydration_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads and saves the application configuration
pub struct ConfigLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader over the default config path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "PHARMDASH".to_string(),
        }
    }

    /// Create a loader with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "PHARMDASH".to_string(),
        }
    }

    /// Default config path under the platform config directory
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pharmdash")
            .join("config.toml")
    }

    /// Load configuration from file and environment
    pub fn load(&self) -> AppResult<AppConfig> {
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix));

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Save configuration as TOML
    pub fn save(&self, config: &AppConfig) -> AppResult<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
