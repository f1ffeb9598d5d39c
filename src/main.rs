//! Contact Book - Main entry point
//!
//! Runs the scripted walkthrough and prints its output to stdout.

use anyhow::Result;
use contact_book::{demo, Config};
use std::env;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // LOG_LEVEL may live in .env, so load it before building the filter
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only so stdout carries only the walkthrough)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load()?;
    info!("Configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = demo::run(&mut out);
    if let Some(book) = demo::report(result, &mut out)? {
        info!("Walkthrough finished with {} record(s)", book.len());
        if config.json_output {
            serde_json::to_writer_pretty(&mut out, &book)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
