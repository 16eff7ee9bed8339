//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod dashboard;
pub mod decision;
pub mod import;
pub mod metrics;
pub mod transactions;

// Re-export all handlers for use in router
pub use dashboard::*;
pub use decision::*;
pub use import::*;
pub use metrics::*;
pub use transactions::*;
