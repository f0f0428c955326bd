//! Contact Registry - Main entry point
//!
//! Reads newline-delimited JSON contact requests from stdin into a fresh
//! registry and prints the stored contacts as JSON to stdout.

use anyhow::Result;
use contact_registry::{ingest, Config};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only so stdout carries just the JSON output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let summary = match ingest(io::stdin().lock(), config.fail_fast) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Ingestion aborted: {}", e);
            return Err(e.into());
        }
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, summary.registry.get_all_contacts())?;
    writeln!(stdout)?;

    Ok(())
}
