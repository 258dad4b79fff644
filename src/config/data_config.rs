//! Data ingestion and feature engineering configuration.
//!
//! This module holds the parameters consumed by the market data pipeline:
//! exchange sources, candle intervals, indicator set, and storage naming.

use serde::{Deserialize, Serialize};

/// Data ingestion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    // Data sources
    pub data_sources: Vec<String>,
    pub time_intervals: Vec<String>,

    // Feature engineering
    pub technical_indicators: Vec<String>,
    pub lookback_window: usize,
    pub seq_length: usize,

    // Data storage
    pub collection: String,
    pub cache_ttl_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_sources: vec![
                "binance".to_string(),
                "kraken".to_string(),
                "coinbase".to_string(),
            ],
            time_intervals: vec![
                "1m".to_string(),
                "5m".to_string(),
                "15m".to_string(),
                "1h".to_string(),
                "4h".to_string(),
                "1d".to_string(),
            ],
            technical_indicators: vec![
                "RSI".to_string(),
                "MACD".to_string(),
                "BBANDS".to_string(),
                "ATR".to_string(),
                "OBV".to_string(),
            ],
            lookback_window: 100,
            seq_length: 50,
            collection: "market_data".to_string(),
            cache_ttl_secs: 300,
        }
    }
}
