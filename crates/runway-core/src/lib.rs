//! Runway Core Library
//!
//! Shared functionality for the Runway personal finance dashboard:
//! - Derived metrics calculator (burn rate, survival days, safe spend, gauges)
//! - Transaction ledger with CSV loading and monthly aggregation
//! - Chart-data shaping and balance forecast
//! - Insight engine for weekly suggestions and the insights page
//! - Purchase and budget decision helpers
//! - Smart import of bank/UPI messages and quick-add categorization
//! - Caption text and UI state for dashboard renderers

pub mod aggregate;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod decision;
pub mod display;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod ledger;
pub mod metrics;
pub mod models;
pub mod smart_import;
pub mod stability;
pub mod streak;
pub mod ui_state;

pub use aggregate::aggregate_month;
pub use charts::{chart_data, ChartData, ChartSeries};
pub use config::Settings;
pub use dashboard::{build_dashboard, DashboardSummary};
pub use decision::{
    can_i_spend, check_budget, evaluate_purchase, BudgetCheck, BudgetStatus, PurchaseDecision,
    RiskLevel, SpendCheck, SpendSignal,
};
pub use display::DashboardCaptions;
pub use error::{Error, Result};
pub use forecast::{AlertLevel, BalanceForecast};
pub use insights::{insights_report, InsightEngine, InsightsReport, WeeklyInsights};
pub use ledger::Ledger;
pub use metrics::{
    compute_metrics, DerivedMetrics, FinancialSnapshot, FoodOverspendAlert, GaugePercentages,
    MetricsStatus, SURVIVAL_DAYS_SENTINEL,
};
pub use models::{Transaction, TransactionType};
pub use smart_import::{auto_categorize, interpret_message, quick_add, ImportOutcome};
pub use stability::stability_score;
pub use streak::no_spend_streak;
pub use ui_state::{ChartKind, Theme, UiState};
