//! Shared utilities for commands
//!
//! This module contains:
//! - `resolve_today` - The evaluation date (`--today` or the local date)
//! - `load_ledger` - Read a ledger CSV
//! - `load_settings` - Resolve settings from `--config` and defaults

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use runway_core::{Ledger, Settings};

pub fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

pub fn load_ledger(path: &Path) -> Result<Ledger> {
    let ledger = Ledger::load_csv_path(path)
        .with_context(|| format!("Failed to read ledger {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        transactions = ledger.len(),
        "Loaded ledger"
    );
    Ok(ledger)
}

pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    Settings::load(config).context("Failed to load settings")
}
