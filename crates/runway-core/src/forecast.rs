//! Balance forecast and run-out alert level

use serde::{Deserialize, Serialize};

use crate::charts::ChartSeries;
use crate::metrics::SURVIVAL_DAYS_SENTINEL;

/// Colour band for the hero alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Warning,
    Danger,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify whole days until the balance runs out against the days left
///
/// Danger below `remaining_days`, warning up to `remaining_days + margin`.
pub fn alert_level(days_to_zero: i64, remaining_days: i64, margin: i64) -> AlertLevel {
    if days_to_zero < remaining_days {
        AlertLevel::Danger
    } else if days_to_zero <= remaining_days + margin {
        AlertLevel::Warning
    } else {
        AlertLevel::Success
    }
}

/// Whole days until `available_balance` is gone; 0 when already empty,
/// the sentinel when nothing is being spent.
pub fn days_to_zero(available_balance: f64, average_daily_spend: f64) -> i64 {
    if average_daily_spend > 0.0 {
        if available_balance > 0.0 {
            (available_balance / average_daily_spend).floor() as i64
        } else {
            0
        }
    } else {
        SURVIVAL_DAYS_SENTINEL as i64
    }
}

/// Projected end-of-day balances for the rest of the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceForecast {
    pub series: ChartSeries,
    /// Whether the projection reaches zero before month end
    pub runs_out: bool,
    pub message: String,
}

/// Walk the balance forward one day at a time for `remaining_days` days
///
/// Each point is the (non-negative) balance at the start of that day; the
/// average daily spend is subtracted after recording it. Labels are
/// `Day N` counted from `current_day + 1`.
pub fn balance_forecast(
    available_balance: f64,
    average_daily_spend: f64,
    current_day: u32,
    remaining_days: u32,
) -> BalanceForecast {
    let mut balance = available_balance;
    let mut series = ChartSeries::default();

    for i in 1..=remaining_days {
        series.labels.push(format!("Day {}", current_day + i));
        series.data.push(balance.max(0.0));
        balance -= average_daily_spend;
    }

    let runs_out = balance <= 0.0;
    let message = if runs_out {
        let days = if average_daily_spend > 0.0 {
            (available_balance / average_daily_spend).floor() as i64
        } else {
            SURVIVAL_DAYS_SENTINEL as i64
        };
        format!("At this rate you may run out of money in {} days.", days)
    } else {
        "You are safe.".to_string()
    };

    BalanceForecast {
        series,
        runs_out,
        message,
    }
}
