//! Derived Metrics Calculator
//!
//! Turns a [`FinancialSnapshot`] of aggregate totals into the numbers the
//! dashboard widgets render: burn rate, survival days, safe daily spend, the
//! four gauge percentages, the top category and weekday, and the food
//! overspend alert.
//!
//! [`compute_metrics`] is pure and total. Every division is guarded, and
//! degenerate input maps to a fallback (zero, empty, or
//! [`SURVIVAL_DAYS_SENTINEL`]) instead of an error. Out-of-range calendar
//! fields and negative totals are accepted as-is.

use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

/// Survival days reported when there is no burn rate ("safe indefinitely")
pub const SURVIVAL_DAYS_SENTINEL: f64 = 999.0;

/// Share of total expense above which a food/dining category raises an alert
pub const FOOD_OVERSPEND_SHARE: f64 = 0.40;

/// Fraction of food spend assumed recoverable by cooking at home
pub const FOOD_SAVINGS_RATE: f64 = 0.15;

/// The safe-spend gauge is drawn on a half scale: spending exactly the
/// current average lands at 50%.
pub const SAFE_SPEND_GAUGE_SCALE: f64 = 50.0;

const FOOD_LABELS: [&str; 2] = ["food", "dining"];

/// A single immutable read of aggregate totals for one render
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialSnapshot {
    pub income_total: f64,
    pub expense_total: f64,
    /// Nominally 1..=days_in_month; fractional or out-of-range values pass through
    pub current_day_of_month: f64,
    pub days_in_month: f64,
    #[serde(deserialize_with = "nullable_vec")]
    pub category_labels: Vec<String>,
    #[serde(deserialize_with = "nullable_vec")]
    pub category_values: Vec<f64>,
    #[serde(deserialize_with = "nullable_vec")]
    pub weekday_labels: Vec<String>,
    #[serde(deserialize_with = "nullable_vec")]
    pub weekday_values: Vec<f64>,
}

/// Accept `null` wherever a sequence is expected
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FinancialSnapshot {
    pub fn new(
        income_total: f64,
        expense_total: f64,
        current_day_of_month: f64,
        days_in_month: f64,
    ) -> Self {
        Self {
            income_total,
            expense_total,
            current_day_of_month,
            days_in_month,
            ..Default::default()
        }
    }

    pub fn with_categories<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.category_labels = labels.into_iter().map(Into::into).collect();
        self.category_values = values.into_iter().collect();
        self
    }

    pub fn with_weekdays<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.weekday_labels = labels.into_iter().map(Into::into).collect();
        self.weekday_values = values.into_iter().collect();
        self
    }

    /// Category labels and values, or empty slices when their lengths differ
    pub fn categories(&self) -> (&[String], &[f64]) {
        paired(&self.category_labels, &self.category_values, "category")
    }

    /// Weekday labels and values, or empty slices when their lengths differ
    pub fn weekdays(&self) -> (&[String], &[f64]) {
        paired(&self.weekday_labels, &self.weekday_values, "weekday")
    }

    /// Parse a snapshot from its camelCase JSON form
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// `days_in_month - current_day_of_month`, unclamped
    pub fn remaining_days(&self) -> f64 {
        self.days_in_month - self.current_day_of_month
    }
}

fn paired<'a>(labels: &'a [String], values: &'a [f64], what: &str) -> (&'a [String], &'a [f64]) {
    if labels.len() == values.len() {
        (labels, values)
    } else {
        tracing::warn!(
            series = what,
            labels = labels.len(),
            values = values.len(),
            "Mismatched parallel sequences, treating as empty"
        );
        (&[], &[])
    }
}

/// Overall classification shown in the prediction strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricsStatus {
    /// Income and expense are both zero
    NoData,
    /// Balance runs out before month end at the current burn rate
    AtRisk,
    Optimal,
}

impl MetricsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoData => "NO_DATA",
            Self::AtRisk => "AT_RISK",
            Self::Optimal => "OPTIMAL",
        }
    }
}

impl std::fmt::Display for MetricsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four circular-gauge fill levels, each in `[0, 100]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugePercentages {
    pub balance_health: f64,
    pub survival: f64,
    pub savings: f64,
    pub safe_spend: f64,
}

/// Raised when food/dining dominates spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodOverspendAlert {
    /// Label as it appeared in the snapshot
    pub category: String,
    pub amount: f64,
    pub share_percent: f64,
    pub potential_savings: f64,
}

/// Values derived from one snapshot; recomputed on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub average_daily_spend: f64,
    pub inferred_balance: f64,
    pub survival_days: f64,
    pub projected_monthly_savings: f64,
    pub safe_daily_spend: f64,
    pub remaining_days: f64,
    pub status: MetricsStatus,
    pub gauges: GaugePercentages,
    pub top_category: Option<String>,
    pub top_category_share_percent: f64,
    pub top_weekday: Option<String>,
    pub is_weekend_heavy: bool,
    pub food_overspend_alert: Option<FoodOverspendAlert>,
}

impl DerivedMetrics {
    /// True when survival days is the "no burn rate" sentinel
    pub fn is_unlimited(&self) -> bool {
        self.survival_days >= SURVIVAL_DAYS_SENTINEL
    }
}

/// Compute every derived value for a snapshot
pub fn compute_metrics(snapshot: &FinancialSnapshot) -> DerivedMetrics {
    let income = snapshot.income_total;
    let expense = snapshot.expense_total;
    let days_in_month = snapshot.days_in_month;
    let remaining_days = snapshot.remaining_days();

    let average_daily_spend = expense / snapshot.current_day_of_month.max(1.0);
    let inferred_balance = (income - expense).max(0.0);
    let survival_days = survival_days(inferred_balance, average_daily_spend);
    let projected_monthly_savings = income - average_daily_spend * days_in_month;
    let safe_daily_spend = inferred_balance / remaining_days.max(1.0);

    let status = if income == 0.0 && expense == 0.0 {
        MetricsStatus::NoData
    } else if survival_days < remaining_days {
        MetricsStatus::AtRisk
    } else {
        MetricsStatus::Optimal
    };

    let gauges = GaugePercentages {
        balance_health: if income != 0.0 {
            clamp_percent(inferred_balance / income * 100.0)
        } else {
            0.0
        },
        survival: if days_in_month > 0.0 {
            clamp_percent(survival_days.min(days_in_month) / days_in_month * 100.0)
        } else {
            0.0
        },
        savings: if income != 0.0 {
            clamp_percent(projected_monthly_savings.max(0.0) / income * 100.0)
        } else {
            0.0
        },
        safe_spend: if average_daily_spend != 0.0 {
            clamp_percent(safe_daily_spend / average_daily_spend * SAFE_SPEND_GAUGE_SCALE)
        } else {
            0.0
        },
    };

    let (category_labels, category_values) = snapshot.categories();
    let (top_category, top_category_share_percent) = match leftmost_argmax(category_values) {
        Some((idx, max)) => {
            let share = if expense != 0.0 {
                round_half_up(max / expense * 100.0)
            } else {
                0.0
            };
            (Some(category_labels[idx].clone()), share)
        }
        None => (None, 0.0),
    };

    let (weekday_labels, weekday_values) = snapshot.weekdays();
    let top_weekday =
        leftmost_argmax(weekday_values).map(|(idx, _)| weekday_labels[idx].clone());
    let is_weekend_heavy = top_weekday.as_deref().is_some_and(is_weekend_label);

    let food_overspend_alert = food_overspend_alert(category_labels, category_values, expense);

    let metrics = DerivedMetrics {
        average_daily_spend,
        inferred_balance,
        survival_days,
        projected_monthly_savings,
        safe_daily_spend,
        remaining_days,
        status,
        gauges,
        top_category,
        top_category_share_percent,
        top_weekday,
        is_weekend_heavy,
        food_overspend_alert,
    };

    tracing::debug!(
        status = %metrics.status,
        avg_daily = metrics.average_daily_spend,
        survival_days = metrics.survival_days,
        safe_daily = metrics.safe_daily_spend,
        "Computed derived metrics"
    );

    metrics
}

/// Days until `balance` is exhausted at `average_daily_spend`, or the sentinel
/// when there is no burn.
pub fn survival_days(balance: f64, average_daily_spend: f64) -> f64 {
    if average_daily_spend > 0.0 {
        balance / average_daily_spend
    } else {
        SURVIVAL_DAYS_SENTINEL
    }
}

/// Clamp to `[0, 100]`; NaN becomes 0
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Round with halves going toward positive infinity (2.5 -> 3, -2.5 -> -2)
pub fn round_half_up(value: f64) -> f64 {
    // value - floor(value) is exact, unlike value + 0.5
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Index and value of the first maximum. Later equal values do not win.
pub fn leftmost_argmax(values: &[f64]) -> Option<(usize, f64)> {
    let mut iter = values.iter().copied().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, (idx, value)| {
        if value > best.1 {
            (idx, value)
        } else {
            best
        }
    }))
}

/// Whether a weekday label ("Saturday", "sun", ...) names a weekend day
pub fn is_weekend_label(label: &str) -> bool {
    matches!(
        Weekday::from_str(label.trim()),
        Ok(Weekday::Sat) | Ok(Weekday::Sun)
    )
}

fn food_overspend_alert(
    labels: &[String],
    values: &[f64],
    expense_total: f64,
) -> Option<FoodOverspendAlert> {
    let idx = labels.iter().position(|label| {
        let lower = label.to_lowercase();
        FOOD_LABELS.contains(&lower.as_str())
    })?;
    let amount = values[idx];
    let ratio = if expense_total > 0.0 {
        amount / expense_total
    } else {
        0.0
    };

    (ratio > FOOD_OVERSPEND_SHARE).then(|| FoodOverspendAlert {
        category: labels[idx].clone(),
        amount,
        share_percent: round_half_up(ratio * 100.0),
        potential_savings: round_half_up(amount * FOOD_SAVINGS_RATE),
    })
}
