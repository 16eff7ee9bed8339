//! Dashboard assembly
//!
//! Composes the monthly snapshot, derived metrics, forecast, stability score
//! and weekly suggestions into the single payload a dashboard renders.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_month;
use crate::charts::{category_breakdown, spending_trend, ChartSeries};
use crate::config::Settings;
use crate::display::DashboardCaptions;
use crate::forecast::{alert_level, balance_forecast, days_to_zero, AlertLevel, BalanceForecast};
use crate::insights::{smart_suggestions, weekly_insights, InsightEngine, WeeklyInsights};
use crate::ledger::{same_month, Ledger};
use crate::metrics::{compute_metrics, DerivedMetrics, FinancialSnapshot};
use crate::models::Transaction;
use crate::stability::stability_score;
use crate::streak::no_spend_streak;

/// Rows shown in the recent transactions table
pub const RECENT_TRANSACTIONS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub snapshot: FinancialSnapshot,
    pub metrics: DerivedMetrics,
    pub captions: DashboardCaptions,
    /// Income minus expense this month; may be negative
    pub current_balance: f64,
    /// `current_balance` floored at 0
    pub available_balance: f64,
    pub safe_daily_spend: f64,
    /// Days left in the month, at least 1
    pub remaining_days: u32,
    pub average_daily_spend: f64,
    /// Whole days until the available balance is gone
    pub forecast_days: i64,
    pub alert_level: AlertLevel,
    pub stability_score: u8,
    pub streak: u32,
    pub spending_trend: ChartSeries,
    pub categories: ChartSeries,
    pub forecast: BalanceForecast,
    pub weekly: Option<WeeklyInsights>,
    pub suggestions: Vec<String>,
    pub recent_transactions: Vec<Transaction>,
}

/// Build the dashboard for the month containing `today`
///
/// Monthly figures use this month's transactions; the spending trend, the
/// weekly suggestions and the streak look at the whole ledger.
pub fn build_dashboard(ledger: &Ledger, today: NaiveDate, settings: &Settings) -> DashboardSummary {
    let transactions = ledger.transactions();
    let snapshot = aggregate_month(transactions, today);
    let metrics = compute_metrics(&snapshot);

    let current_day = today.day();
    let remaining_days = (snapshot.days_in_month as u32)
        .saturating_sub(current_day)
        .max(1);

    let current_balance = snapshot.income_total - snapshot.expense_total;
    let available_balance = current_balance.max(0.0);
    let safe_daily_spend = available_balance / remaining_days as f64;
    let average_daily_spend = snapshot.expense_total / current_day.max(1) as f64;

    let forecast = balance_forecast(
        available_balance,
        average_daily_spend,
        current_day,
        remaining_days,
    );
    let forecast_days = days_to_zero(available_balance, average_daily_spend);
    let alert = alert_level(
        forecast_days,
        remaining_days as i64,
        settings.warning_margin_days,
    );

    let weekly = weekly_insights(transactions, today);
    let suggestions = smart_suggestions(&InsightEngine::new(), weekly.as_ref(), settings);

    let recent_transactions: Vec<Transaction> = ledger
        .recent(ledger.len())
        .into_iter()
        .filter(|t| same_month(t.date, today))
        .take(RECENT_TRANSACTIONS)
        .collect();

    tracing::info!(
        month = %today.format("%Y-%m"),
        status = %metrics.status,
        alert = %alert,
        forecast_days,
        "Dashboard built"
    );

    DashboardSummary {
        today,
        captions: DashboardCaptions::new(&metrics, &settings.currency_symbol),
        stability_score: stability_score(
            snapshot.income_total,
            snapshot.expense_total,
            available_balance,
        ),
        streak: no_spend_streak(transactions, today),
        spending_trend: spending_trend(transactions, today),
        categories: category_breakdown(transactions, today),
        snapshot,
        metrics,
        current_balance,
        available_balance,
        safe_daily_spend,
        remaining_days,
        average_daily_spend,
        forecast_days,
        alert_level: alert,
        forecast,
        weekly,
        suggestions,
        recent_transactions,
    }
}
