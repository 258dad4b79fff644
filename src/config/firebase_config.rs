//! Firebase persistence backend configuration.
//!
//! Credentials path and database URL are resolved from the environment with
//! local-development fallbacks. Whether the values are actually usable is
//! checked by the aggregator, which requires both variables to be set.

use serde::{Deserialize, Serialize};
use std::env;

/// Firebase endpoint identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    pub credentials_path: String,
    pub database_url: String,
    pub collection_prefix: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            credentials_path: "./firebase-credentials.json".to_string(),
            database_url: String::new(),
            collection_prefix: "trading_system_".to_string(),
        }
    }
}

impl FirebaseConfig {
    pub fn from_env() -> Self {
        Self {
            credentials_path: env::var("FIREBASE_CREDENTIALS_PATH")
                .unwrap_or_else(|_| "./firebase-credentials.json".to_string()),
            database_url: env::var("FIREBASE_DATABASE_URL").unwrap_or_default(),
            collection_prefix: "trading_system_".to_string(),
        }
    }

    /// Collection holding the live system state snapshot.
    ///
    /// Computed from the current prefix on every call, as are the trades
    /// and metrics accessors below.
    pub fn state_collection(&self) -> String {
        format!("{}state", self.collection_prefix)
    }

    /// Collection holding the executed trade log.
    pub fn trades_collection(&self) -> String {
        format!("{}trades", self.collection_prefix)
    }

    /// Collection holding performance metrics.
    pub fn metrics_collection(&self) -> String {
        format!("{}metrics", self.collection_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firebase_config_defaults() {
        let config = FirebaseConfig::default();
        assert_eq!(config.credentials_path, "./firebase-credentials.json");
        assert_eq!(config.database_url, "");
        assert_eq!(config.collection_prefix, "trading_system_");
    }

    #[test]
    fn test_derived_collections() {
        let config = FirebaseConfig::default();
        assert_eq!(config.state_collection(), "trading_system_state");
        assert_eq!(config.trades_collection(), "trading_system_trades");
        assert_eq!(config.metrics_collection(), "trading_system_metrics");
    }

    #[test]
    fn test_derived_collections_follow_prefix() {
        let mut config = FirebaseConfig::default();
        config.collection_prefix = "staging_".to_string();

        assert_eq!(config.state_collection(), "staging_state");
        assert_eq!(config.trades_collection(), "staging_trades");
        assert_eq!(config.metrics_collection(), "staging_metrics");
    }
}
