//! Monitoring and alerting configuration.

use serde::{Deserialize, Serialize};

/// Monitoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub metrics_update_interval_secs: u64,
    /// Drawdown fraction that triggers an alert (e.g., 0.1 = 10%)
    pub drawdown_alert_threshold: f64,

    // Performance thresholds
    pub max_latency_ms: u64,
    pub min_data_quality_score: f64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
            metrics_update_interval_secs: 60,
            drawdown_alert_threshold: 0.1,
            max_latency_ms: 1000,
            min_data_quality_score: 0.8,
        }
    }
}
