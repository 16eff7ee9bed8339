//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `common` - Shared utilities (ledger/settings loading, date resolution)
//! - `metrics` - Derived metrics for a snapshot file
//! - `dashboard` - Dashboard, insights and chart commands
//! - `decision` - Buy / check / spend decisions
//! - `parse` - Smart import message parsing
//! - `serve` - Web server command

pub mod common;
pub mod dashboard;
pub mod decision;
pub mod metrics;
pub mod parse;
pub mod serve;

// Re-export command functions for main.rs
pub use common::*;
pub use dashboard::*;
pub use decision::*;
pub use metrics::*;
pub use parse::*;
pub use serve::*;
