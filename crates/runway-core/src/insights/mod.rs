//! Insight Engine - Spending Suggestions
//!
//! Analyzers look at the last seven days of expenses and raise findings
//! when one category dominates, when there are many small purchases, or when
//! the most expensive day fell on a weekend. The insights page adds a
//! survival prediction, behaviour notes and monthly rules on top.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use runway_core::insights::{smart_suggestions, weekly_insights, InsightEngine};
//!
//! let engine = InsightEngine::new();
//! let weekly = weekly_insights(ledger.transactions(), today);
//! let suggestions = smart_suggestions(&engine, weekly.as_ref(), &settings);
//! ```

pub mod category_share;
pub mod engine;
pub mod habits;
pub mod report;
pub mod types;
pub mod weekly;

pub use category_share::CategoryShareInsight;
pub use engine::{smart_suggestions, AnalysisContext, Insight, InsightEngine};
pub use habits::{MicroSpendingInsight, WeekendSpendingInsight};
pub use report::{
    behaviour_insights, insights_report, smart_rules, survival_prediction, InsightsReport,
    SpendingMix, SurvivalPrediction,
};
pub use types::{CategoryShareData, Finding, InsightType, Severity};
pub use weekly::{weekly_insights, CategoryAmount, WeeklyInsights, WEEKLY_WINDOW_DAYS};
