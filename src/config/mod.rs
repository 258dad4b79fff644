//! Configuration module for the autonomous trading platform.
//!
//! This module provides structured configuration organized by domain:
//! data ingestion, model training, trade execution, Firebase persistence,
//! and monitoring. Groups carry fixed defaults; only the Firebase group
//! resolves values from the environment.

mod data_config;
mod firebase_config;
mod model_config;
mod monitoring_config;
mod trading_config;

pub use data_config::DataConfig;
pub use firebase_config::FirebaseConfig;
pub use model_config::ModelConfig;
pub use monitoring_config::MonitoringConfig;
pub use trading_config::TradingConfig;

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variables that must be set to a non-empty value before the
/// system is allowed to start.
pub const REQUIRED_ENV_VARS: [&str; 2] = ["FIREBASE_CREDENTIALS_PATH", "FIREBASE_DATABASE_URL"];

/// Main application configuration.
///
/// Aggregates one instance of each parameter group. Once constructed via
/// [`Config::from_env`], every mandatory environment-sourced value is known
/// to be non-empty and no later operation on the value can fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub model: ModelConfig,
    pub trading: TradingConfig,
    pub firebase: FirebaseConfig,
    pub monitoring: MonitoringConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Composes all parameter groups, then verifies the mandatory
    /// environment variables in one pass. Every missing name is collected
    /// before failing, so a single error reports the full set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] if any variable in
    /// [`REQUIRED_ENV_VARS`] is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            data: DataConfig::default(),
            model: ModelConfig::default(),
            trading: TradingConfig::default(),
            firebase: FirebaseConfig::from_env(),
            monitoring: MonitoringConfig::default(),
        };

        config.validate_env()?;
        Ok(config)
    }

    fn validate_env(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        for name in REQUIRED_ENV_VARS {
            let present = env::var(name).map(|v| !v.is_empty()).unwrap_or(false);
            if !present {
                missing.push(name.to_string());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingConfiguration { missing })
        }
    }
}
