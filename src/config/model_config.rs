//! Model training configuration: SSL pretraining and the RL agent.

use serde::{Deserialize, Serialize};

/// Model hyperparameter configuration
///
/// Numeric ranges (dropout in [0, 1], gamma in (0, 1)) are held by the
/// defaults; the learning subsystems own any runtime enforcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    // Self-supervised pretraining
    pub ssl_hidden_dim: usize,
    pub ssl_dropout: f64,
    pub ssl_learning_rate: f64,
    pub ssl_batch_size: usize,
    pub ssl_pretrain_epochs: usize,

    // Reinforcement learning
    pub rl_env_name: String,
    pub rl_learning_rate: f64,
    pub rl_gamma: f64,
    pub rl_buffer_size: usize,
    pub rl_batch_size: usize,
    pub rl_target_update_freq: usize,

    // Model storage
    pub model_bucket: String,
    pub checkpoint_freq: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ssl_hidden_dim: 128,
            ssl_dropout: 0.2,
            ssl_learning_rate: 0.001,
            ssl_batch_size: 64,
            ssl_pretrain_epochs: 100,
            rl_env_name: "TradingEnv-v0".to_string(),
            rl_learning_rate: 0.0003,
            rl_gamma: 0.99,
            rl_buffer_size: 100_000,
            rl_batch_size: 256,
            rl_target_update_freq: 100,
            model_bucket: "trading-models".to_string(),
            checkpoint_freq: 1000,
        }
    }
}
