//! Trade execution and risk configuration.
//!
//! Order timeout and retry counts are values consumed by the execution
//! engine; this module only carries them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Trading execution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingConfig {
    // Risk management
    /// Maximum position size as a fraction of portfolio (e.g., 0.1 = 10%)
    pub max_position_size_pct: f64,
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
    pub max_drawdown_pct: f64,

    // Execution
    pub order_timeout_secs: u64,
    pub retry_attempts: u32,

    // Portfolio
    pub initial_capital: Decimal,
    pub allocation_strategy: String,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            max_position_size_pct: 0.1,
            stop_loss_pct: 0.02,
            take_profit_pct: 0.05,
            max_drawdown_pct: 0.15,
            order_timeout_secs: 30,
            retry_attempts: 3,
            initial_capital: dec!(100_000),
            allocation_strategy: "risk_parity".to_string(),
        }
    }
}
