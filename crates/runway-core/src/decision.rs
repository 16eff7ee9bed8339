//! Spending decisions: "should I buy this?", budget checks and the quick
//! "can I spend this today?" calculator.
//!
//! All three work from monthly totals. Days passed and days remaining are
//! both floored at 1.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::{FinancialSnapshot, SURVIVAL_DAYS_SENTINEL};
use crate::stability::stability_score;

/// Survival within this many days of month end is already high risk
const HIGH_RISK_MARGIN_DAYS: f64 = 3.0;

/// Safe price suggestions are rounded down to a multiple of this
const SAFE_PRICE_STEP: f64 = 50.0;

/// Purchase risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Low => "Safe to buy",
            Self::Medium => "Risky purchase",
            Self::High => "Do NOT buy",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Month simulated with and without a purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDecision {
    pub item_name: String,
    pub price: f64,
    pub current_balance: f64,
    pub post_balance: f64,
    pub current_safe_daily: f64,
    pub post_safe_daily: f64,
    pub current_survival_days: f64,
    pub post_survival_days: f64,
    pub stability_score_before: u8,
    pub stability_score_after: u8,
    pub stability_delta: i32,
    pub risk_level: RiskLevel,
    pub verdict: String,
    pub runout_message: String,
    /// Largest price that keeps survival through month end, floored to 50
    pub safe_price: f64,
    pub days_remaining: f64,
    pub days_short: i64,
}

fn days_passed(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.current_day_of_month.max(1.0)
}

fn days_remaining(snapshot: &FinancialSnapshot) -> f64 {
    snapshot.remaining_days().max(1.0)
}

/// Survival for a possibly-negative balance: 0 when nothing is left
fn survival_for(balance: f64, average_daily_spend: f64) -> f64 {
    if average_daily_spend > 0.0 {
        if balance > 0.0 {
            balance / average_daily_spend
        } else {
            0.0
        }
    } else if balance > 0.0 {
        SURVIVAL_DAYS_SENTINEL
    } else {
        0.0
    }
}

/// Simulate buying `item_name` for `price` this month
pub fn evaluate_purchase(
    snapshot: &FinancialSnapshot,
    item_name: &str,
    price: f64,
) -> Result<PurchaseDecision> {
    if !price.is_finite() || price <= 0.0 {
        return Err(Error::InvalidData("Invalid price".to_string()));
    }

    let income = snapshot.income_total;
    let expense = snapshot.expense_total;
    let days_remaining = days_remaining(snapshot);

    let current_balance = income - expense;
    let available_balance = current_balance.max(0.0);
    let average_daily_spend = expense / days_passed(snapshot);

    let current_survival_days = survival_for(current_balance, average_daily_spend);

    let post_balance = current_balance - price;
    let post_available_balance = post_balance.max(0.0);
    let post_survival_days = survival_for(post_balance, average_daily_spend);

    let stability_score_before = stability_score(income, expense, available_balance);
    let stability_score_after = stability_score(income, expense, post_available_balance);
    let stability_delta = stability_score_after as i32 - stability_score_before as i32;

    let days_short = if post_survival_days == SURVIVAL_DAYS_SENTINEL {
        0
    } else {
        ((days_remaining - post_survival_days).round_ties_even() as i64).max(0)
    };

    let risk_level = if post_balance < 0.0
        || post_survival_days < (days_remaining - HIGH_RISK_MARGIN_DAYS).max(0.0)
        || stability_delta < -15
    {
        RiskLevel::High
    } else if post_survival_days < days_remaining || stability_delta < -5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let runout_message = if post_balance <= 0.0 {
        "If you buy this, you will be out of money immediately.".to_string()
    } else if days_short > 0 {
        format!(
            "If you buy this, you will run out of money {} days before month end.",
            days_short
        )
    } else {
        "This purchase does not make you run out before month end.".to_string()
    };

    let safe_price_raw = if average_daily_spend > 0.0 {
        (current_balance - average_daily_spend * days_remaining).max(0.0)
    } else {
        current_balance.max(0.0)
    };
    let safe_price = if safe_price_raw <= 0.0 {
        0.0
    } else {
        (safe_price_raw / SAFE_PRICE_STEP).floor() * SAFE_PRICE_STEP
    };

    let item_name = match item_name.trim() {
        "" => "Planned purchase".to_string(),
        name => name.to_string(),
    };

    tracing::debug!(
        item = %item_name,
        price,
        risk = %risk_level,
        stability_delta,
        "Evaluated purchase"
    );

    Ok(PurchaseDecision {
        item_name,
        price,
        current_balance,
        post_balance,
        current_safe_daily: available_balance / days_remaining,
        post_safe_daily: post_available_balance / days_remaining,
        current_survival_days,
        post_survival_days,
        stability_score_before,
        stability_score_after,
        stability_delta,
        verdict: risk_level.verdict().to_string(),
        risk_level,
        runout_message,
        safe_price,
        days_remaining,
        days_short,
    })
}

/// Result of checking a single amount against today's safe spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Safe,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCheck {
    pub status: BudgetStatus,
    pub message: String,
    pub safe_daily_spend: f64,
}

/// Whether spending `amount` today stays within the safe daily spend
pub fn check_budget(snapshot: &FinancialSnapshot, amount: f64) -> BudgetCheck {
    let balance = (snapshot.income_total - snapshot.expense_total).max(0.0);
    let safe_daily_spend = balance / days_remaining(snapshot);

    if amount <= safe_daily_spend {
        BudgetCheck {
            status: BudgetStatus::Safe,
            message: "Safe to spend".to_string(),
            safe_daily_spend,
        }
    } else {
        BudgetCheck {
            status: BudgetStatus::Danger,
            message: "Not recommended — will affect your monthly survival".to_string(),
            safe_daily_spend,
        }
    }
}

/// Traffic-light answer for the quick spend calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendSignal {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendCheck {
    pub signal: SpendSignal,
    pub message: String,
    /// Safe daily spend tomorrow if the amount is spent today
    pub safe_tomorrow: f64,
}

/// Grade `amount` against `safe_limit`: green up to the limit, yellow up to
/// 1.5x, red beyond.
pub fn can_i_spend(
    amount: f64,
    safe_limit: f64,
    balance: f64,
    remaining_days: f64,
) -> Result<SpendCheck> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidData(format!("Invalid amount: {}", amount)));
    }

    let remaining = if remaining_days >= 1.0 { remaining_days } else { 1.0 };
    let future_balance = balance - amount;
    let tomorrow_days = if remaining > 1.0 { remaining - 1.0 } else { 1.0 };
    let safe_tomorrow = if future_balance > 0.0 {
        future_balance / tomorrow_days
    } else {
        0.0
    };

    let (signal, message) = if amount <= safe_limit {
        (
            SpendSignal::Green,
            "You can spend this safely today.".to_string(),
        )
    } else if amount <= safe_limit * 1.5 {
        (
            SpendSignal::Yellow,
            "This will reduce your budget for tomorrow.".to_string(),
        )
    } else {
        let days_left = (balance / amount).floor().max(0.0) as i64;
        (
            SpendSignal::Red,
            format!(
                "Not recommended. This may cause you to run out of money in {} days.",
                days_left
            ),
        )
    };

    Ok(SpendCheck {
        signal,
        message,
        safe_tomorrow,
    })
}
