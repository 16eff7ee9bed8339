//! Runway CLI - Personal finance dashboard
//!
//! Usage:
//!   runway metrics --snapshot FILE     Derived metrics for a snapshot
//!   runway dashboard --ledger CSV      Monthly dashboard
//!   runway buy --ledger CSV --price P  Should I buy this?
//!   runway serve --port 3000           Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let today = commands::resolve_today(cli.today);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Metrics { snapshot, json } => commands::cmd_metrics(&snapshot, json),
        Commands::Dashboard {
            ledger,
            theme,
            json,
        } => commands::cmd_dashboard(&ledger, config, today, &theme, json),
        Commands::Insights { ledger, json } => {
            commands::cmd_insights(&ledger, config, today, json)
        }
        Commands::Charts { ledger } => commands::cmd_charts(&ledger, today),
        Commands::Buy {
            ledger,
            price,
            item,
        } => commands::cmd_buy(&ledger, today, &item, price),
        Commands::Check { ledger, amount } => commands::cmd_check(&ledger, today, amount),
        Commands::Spend { ledger, amount } => commands::cmd_spend(&ledger, today, amount),
        Commands::Parse { message } => commands::cmd_parse(&message),
        Commands::Serve {
            ledger,
            port,
            host,
            static_dir,
        } => {
            commands::cmd_serve(
                ledger.as_deref(),
                config,
                cli.today,
                &host,
                port,
                static_dir.as_deref(),
            )
            .await
        }
    }
}
