//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::{NamedTempFile, TempDir};

use crate::commands;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn write_ledger() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,amount,category,type,description
2024-03-01,20000,Salary,income,March stipend
2024-03-02,1200,Food,expense,Dinner out
2024-03-09,1500,Food,expense,Party
2024-03-11,300,Travel,expense,Metro card
2024-03-14,900,Bills,expense,Electricity"
    )
    .unwrap();
    file
}

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[display]\ncurrency_symbol = \"$\"\n").unwrap();
    path
}

// ========== Common Tests ==========

#[test]
fn test_resolve_today_prefers_override() {
    assert_eq!(commands::resolve_today(Some(today())), today());
}

#[test]
fn test_load_ledger_missing_file() {
    let result = commands::load_ledger(Path::new("/nonexistent/ledger.csv"));
    assert!(result.is_err());
}

#[test]
fn test_load_settings_from_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let settings = commands::load_settings(Some(&config)).unwrap();
    assert_eq!(settings.currency_symbol, "$");
}

// ========== Metrics Command Tests ==========

#[test]
fn test_cmd_metrics() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"incomeTotal": 10000, "expenseTotal": 6000, "currentDayOfMonth": 10, "daysInMonth": 30}}"#
    )
    .unwrap();

    assert!(commands::cmd_metrics(file.path(), false).is_ok());
    assert!(commands::cmd_metrics(file.path(), true).is_ok());
}

#[test]
fn test_cmd_metrics_invalid_snapshot() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    assert!(commands::cmd_metrics(file.path(), false).is_err());
}

// ========== Dashboard Command Tests ==========

#[test]
fn test_cmd_dashboard() {
    let ledger = write_ledger();
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let result = commands::cmd_dashboard(ledger.path(), Some(&config), today(), "light", false);
    assert!(result.is_ok());

    let result = commands::cmd_dashboard(ledger.path(), Some(&config), today(), "DARK", true);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_dashboard_invalid_theme() {
    let ledger = write_ledger();
    let result = commands::cmd_dashboard(ledger.path(), None, today(), "sepia", false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_insights() {
    let ledger = write_ledger();
    assert!(commands::cmd_insights(ledger.path(), None, today(), false).is_ok());
    assert!(commands::cmd_insights(ledger.path(), None, today(), true).is_ok());
}

#[test]
fn test_cmd_charts() {
    let ledger = write_ledger();
    assert!(commands::cmd_charts(ledger.path(), today()).is_ok());
}

// ========== Decision Command Tests ==========

#[test]
fn test_cmd_buy() {
    let ledger = write_ledger();
    assert!(commands::cmd_buy(ledger.path(), today(), "Headphones", 2500.0).is_ok());
}

#[test]
fn test_cmd_buy_invalid_price() {
    let ledger = write_ledger();
    assert!(commands::cmd_buy(ledger.path(), today(), "Headphones", 0.0).is_err());
    assert!(commands::cmd_buy(ledger.path(), today(), "Headphones", -10.0).is_err());
}

#[test]
fn test_cmd_check() {
    let ledger = write_ledger();
    assert!(commands::cmd_check(ledger.path(), today(), 500.0).is_ok());
}

#[test]
fn test_cmd_spend() {
    let ledger = write_ledger();
    assert!(commands::cmd_spend(ledger.path(), today(), 500.0).is_ok());
    assert!(commands::cmd_spend(ledger.path(), today(), 0.0).is_err());
}

#[test]
fn test_cmd_spend_missing_ledger() {
    let result = commands::cmd_spend(Path::new("/nonexistent/ledger.csv"), today(), 100.0);
    assert!(result.is_err());
}

// ========== Parse Command Tests ==========

#[test]
fn test_cmd_parse() {
    assert!(commands::cmd_parse("Rs.450 paid to Swiggy").is_ok());
    // Unreadable messages are reported, not failed
    assert!(commands::cmd_parse("hello there").is_ok());
}
