//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Runway - How long does your money last this month?
#[derive(Parser)]
#[command(name = "runway")]
#[command(about = "Personal finance dashboard: burn rate, survival days, safe spend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to RUNWAY_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute derived metrics from a snapshot JSON file
    Metrics {
        /// Snapshot file (camelCase JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show the monthly dashboard for a ledger CSV
    Dashboard {
        /// Ledger CSV (date,amount,category,type,description)
        #[arg(short, long)]
        ledger: PathBuf,

        /// Chart colour theme: light, dark
        #[arg(long, default_value = "light")]
        theme: String,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show weekly suggestions, behaviour notes and monthly rules
    Insights {
        /// Ledger CSV
        #[arg(short, long)]
        ledger: PathBuf,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Print chart series as JSON
    Charts {
        /// Ledger CSV
        #[arg(short, long)]
        ledger: PathBuf,
    },

    /// Should I buy this?
    Buy {
        /// Ledger CSV
        #[arg(short, long)]
        ledger: PathBuf,

        /// Purchase price
        #[arg(short, long)]
        price: f64,

        /// What you want to buy
        #[arg(short, long, default_value = "Planned purchase")]
        item: String,
    },

    /// Check an amount against today's safe daily spend
    Check {
        /// Ledger CSV
        #[arg(short, long)]
        ledger: PathBuf,

        /// Amount to spend today
        #[arg(short, long)]
        amount: f64,
    },

    /// Can I spend this today? (green / yellow / red)
    Spend {
        /// Ledger CSV
        #[arg(short, long)]
        ledger: PathBuf,

        /// Amount to spend today
        #[arg(short, long)]
        amount: f64,
    },

    /// Read an amount and category from a bank/UPI message
    Parse {
        /// Message text, e.g. "Rs.450 paid to Swiggy"
        message: String,
    },

    /// Start the web server
    Serve {
        /// Ledger CSV to load at startup (starts empty if omitted)
        #[arg(short, long)]
        ledger: Option<PathBuf>,

        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory of static files to serve alongside the API
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
