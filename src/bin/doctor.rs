//! Configuration doctor - headless startup check
//!
//! Loads the local `.env` file if present, assembles the full configuration
//! from the process environment, and prints the resolved values as JSON.
//! Exits non-zero when mandatory variables are missing, with every missing
//! name in the error message.
//!
//! # Usage
//! ```sh
//! FIREBASE_CREDENTIALS_PATH=./creds.json \
//! FIREBASE_DATABASE_URL=https://project.firebaseio.com \
//! cargo run --bin doctor
//! ```

use anyhow::Result;
use autotrader_config::config::Config;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Configuration doctor {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: sources={:?}, strategy={}, state collection={}",
        config.data.data_sources,
        config.trading.allocation_strategy,
        config.firebase.state_collection()
    );

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
