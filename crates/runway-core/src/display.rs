//! Caption text for the dashboard widgets
//!
//! Everything here is presentation only: the numbers come from
//! [`DerivedMetrics`] and are formatted the way the gauges and chart
//! footers show them.

use serde::{Deserialize, Serialize};

use crate::metrics::{round_half_up, DerivedMetrics, MetricsStatus};

/// Survival above this many days is shown as "99+ d"
pub const SURVIVAL_CAPTION_CAP: f64 = 900.0;

/// Whole-unit amount with the currency symbol: `₹1235`
pub fn money(currency_symbol: &str, amount: f64) -> String {
    format!("{}{}", currency_symbol, round_half_up(amount) as i64)
}

/// Gauge fill as a whole percentage: `67%`
pub fn percent(value: f64) -> String {
    format!("{}%", round_half_up(value) as i64)
}

/// Survival gauge text: `6d`, or `99+ d` when effectively unlimited
pub fn survival_caption(survival_days: f64) -> String {
    if survival_days > SURVIVAL_CAPTION_CAP {
        "99+ d".to_string()
    } else {
        format!("{}d", survival_days.floor() as i64)
    }
}

/// Text for the prediction strip under the hero card
pub fn prediction_strip(metrics: &DerivedMetrics) -> String {
    match metrics.status {
        MetricsStatus::NoData => "Awaiting Data Input".to_string(),
        MetricsStatus::AtRisk => format!(
            "WARNING: You may run out of money in {} days",
            metrics.survival_days.floor() as i64
        ),
        MetricsStatus::Optimal => {
            "SYSTEM OPTIMAL: You are safe for the rest of the month".to_string()
        }
    }
}

/// Footer for the category pie chart. Hidden while the share is zero.
pub fn top_category_caption(metrics: &DerivedMetrics) -> Option<String> {
    if metrics.top_category_share_percent <= 0.0 {
        return None;
    }
    metrics.top_category.as_ref().map(|label| {
        format!(
            "{} forms {}% of your monthly spending",
            label, metrics.top_category_share_percent as i64
        )
    })
}

/// Footer for the weekday bar chart
pub fn weekday_caption(metrics: &DerivedMetrics) -> Option<String> {
    metrics.top_weekday.as_ref().map(|label| {
        if metrics.is_weekend_heavy {
            format!("You are overspending on weekends. ({})", label)
        } else {
            format!("{} is your highest burning day.", label)
        }
    })
}

/// Banner text when food dominates spending
pub fn food_alert_caption(metrics: &DerivedMetrics, currency_symbol: &str) -> Option<String> {
    metrics.food_overspend_alert.as_ref().map(|alert| {
        format!(
            "Food expenses form {}% of your spending. Cooking at home 2 times this week could save you {}.",
            alert.share_percent as i64,
            money(currency_symbol, alert.potential_savings)
        )
    })
}

/// Every caption for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCaptions {
    pub prediction: String,
    pub balance_health: String,
    pub survival: String,
    pub savings: String,
    pub safe_spend: String,
    pub top_category: Option<String>,
    pub top_weekday: Option<String>,
    pub food_alert: Option<String>,
}

impl DashboardCaptions {
    pub fn new(metrics: &DerivedMetrics, currency_symbol: &str) -> Self {
        Self {
            prediction: prediction_strip(metrics),
            balance_health: percent(metrics.gauges.balance_health),
            survival: survival_caption(metrics.survival_days),
            savings: money(
                currency_symbol,
                metrics.projected_monthly_savings.max(0.0),
            ),
            safe_spend: money(currency_symbol, metrics.safe_daily_spend),
            top_category: top_category_caption(metrics),
            top_weekday: weekday_caption(metrics),
            food_alert: food_alert_caption(metrics, currency_symbol),
        }
    }
}
