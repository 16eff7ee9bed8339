//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use runway_core::Ledger;

use super::{load_ledger, load_settings};

pub async fn cmd_serve(
    ledger_path: Option<&Path>,
    config: Option<&Path>,
    today: Option<NaiveDate>,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    let settings = load_settings(config)?;
    let ledger = match ledger_path {
        Some(path) => load_ledger(path)?,
        None => Ledger::new(),
    };

    // Comma-separated CORS origins
    let allowed_origins: Vec<String> = std::env::var("RUNWAY_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    println!("🚀 Starting Runway web server...");
    match ledger_path {
        Some(path) => println!("   Ledger: {} ({} transactions)", path.display(), ledger.len()),
        None => println!("   Ledger: empty (in memory)"),
    }
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if let Some(date) = today {
        println!("   📅 Evaluating as of {}", date);
    }
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {} (RUNWAY_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Ledger changes are not written back to disk");
    println!("   Press Ctrl+C to stop");

    let server_config = runway_server::ServerConfig {
        allowed_origins,
        today,
    };

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("Static directory path must be valid UTF-8"))
        .transpose()?;
    runway_server::serve(ledger, settings, host, port, static_dir_str, server_config).await?;

    Ok(())
}
