//! Insights page: survival prediction, behaviour notes, monthly rules
//!
//! Totals, category and weekday buckets cover the whole ledger. The average
//! daily spend and the transaction count cover the month of `today` only.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::{category_totals, days_in_month, weekday_name, weekday_totals, WEEKDAYS};
use crate::charts::{recent_daily_totals, ChartSeries};
use crate::config::Settings;
use crate::forecast::{alert_level, AlertLevel};
use crate::ledger::same_month;
use crate::metrics::{is_weekend_label, leftmost_argmax, SURVIVAL_DAYS_SENTINEL};
use crate::models::{Transaction, TransactionType};
use crate::stability::survival_adjusted_score;
use crate::streak::no_spend_streak;

use super::engine::{smart_suggestions, AnalysisContext, InsightEngine};
use super::types::Finding;
use super::weekly::{weekly_insights, WeeklyInsights};

/// Whole-day survival estimate with its colour band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalPrediction {
    pub survival_days: i64,
    pub remaining_days: i64,
    pub level: AlertLevel,
    pub message: String,
}

/// Classify how long `balance` lasts at `average_daily_spend`
///
/// Survival days are rounded to the nearest whole day (ties to even), or the
/// sentinel when nothing is being spent.
pub fn survival_prediction(
    balance: f64,
    average_daily_spend: f64,
    remaining_days: i64,
    margin_days: i64,
) -> SurvivalPrediction {
    let survival_days = if average_daily_spend > 0.0 {
        (balance / average_daily_spend).round_ties_even() as i64
    } else {
        SURVIVAL_DAYS_SENTINEL as i64
    };

    let level = alert_level(survival_days, remaining_days, margin_days);
    let message = match level {
        AlertLevel::Danger => format!("You will run out of money in {} days", survival_days),
        AlertLevel::Warning => "You are cutting it close for the month".to_string(),
        AlertLevel::Success => "You are safe for the rest of the month".to_string(),
    };

    SurvivalPrediction {
        survival_days,
        remaining_days,
        level,
        message,
    }
}

/// Plain-language observations about where the money goes
pub fn behaviour_insights(
    categories: &[(String, f64)],
    weekdays: &[(String, f64)],
    month_transactions: usize,
    average_daily_spend: f64,
    currency_symbol: &str,
) -> Vec<String> {
    let mut notes = Vec::new();

    let category_values: Vec<f64> = categories.iter().map(|(_, v)| *v).collect();
    if let Some((idx, _)) = leftmost_argmax(&category_values) {
        notes.push(format!("Most of your money is going to {}.", categories[idx].0));
    }

    let weekday_values: Vec<f64> = weekdays.iter().map(|(_, v)| *v).collect();
    if weekday_values.iter().sum::<f64>() > 0.0 {
        if let Some((idx, _)) = leftmost_argmax(&weekday_values) {
            notes.push(format!("You spend the most on {}s.", weekdays[idx].0));
        }
    }

    notes.push(format!(
        "You made {} transactions recently.",
        month_transactions
    ));
    notes.push(format!(
        "Average daily spend is {}{}.",
        currency_symbol,
        average_daily_spend.trunc() as i64
    ));
    notes
}

/// Inputs for the monthly advice rules
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpendingMix {
    pub total_expense: f64,
    pub food_expense: f64,
    pub weekend_expense: f64,
    pub month_transactions: usize,
}

/// Monthly advice; always returns at least one line
pub fn smart_rules(mix: &SpendingMix, settings: &Settings) -> Vec<String> {
    let thresholds = &settings.monthly;
    let mut rules = Vec::new();

    if mix.total_expense > 0.0 {
        if mix.food_expense / mix.total_expense > thresholds.food_share {
            let savings = (mix.food_expense * thresholds.food_savings_rate).trunc() as i64;
            rules.push(format!(
                "🍔 Cooking at home could save you {}{} this month.",
                settings.currency_symbol, savings
            ));
        }
        if mix.weekend_expense / mix.total_expense > thresholds.weekend_share {
            rules.push(
                "⚠️ High weekend spending detected. Carefully plan weekend outings.".to_string(),
            );
        }
    }

    if mix.month_transactions > thresholds.micro_spending_count {
        rules.push("🛍️ Frequent micro-spending detected. Try consolidating purchases.".to_string());
    }

    if rules.is_empty() {
        rules.push("✨ Your spending habits are healthy! Keep it up.".to_string());
    }
    rules
}

/// Dates shown in the insights daily chart
pub const INSIGHTS_DAILY_POINTS: usize = 30;

/// Everything shown on the insights page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsReport {
    pub income_total: f64,
    pub expense_total: f64,
    pub average_daily_spend: f64,
    pub survival: SurvivalPrediction,
    pub behaviour: Vec<String>,
    pub smart_rules: Vec<String>,
    /// All-time expense per category
    pub categories: ChartSeries,
    /// All-time expense per weekday, Monday first
    pub weekdays: ChartSeries,
    /// The latest dates with any expense
    pub daily_totals: ChartSeries,
    pub stability_score: u8,
    pub streak: u32,
    pub weekly: Option<WeeklyInsights>,
    pub suggestions: Vec<String>,
    pub findings: Vec<Finding>,
}

pub fn insights_report(
    transactions: &[Transaction],
    today: NaiveDate,
    settings: &Settings,
) -> InsightsReport {
    let days_passed = today.day().max(1) as f64;
    let remaining_days = (days_in_month(today) as i64 - today.day() as i64).max(1);

    let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense()).collect();
    let income_total: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Income)
        .map(|t| t.amount)
        .sum();
    let expense_total: f64 = expenses.iter().map(|t| t.amount).sum();

    let month_expenses: Vec<&Transaction> = expenses
        .iter()
        .copied()
        .filter(|t| same_month(t.date, today))
        .collect();
    let month_expense: f64 = month_expenses.iter().map(|t| t.amount).sum();
    let average_daily_spend = month_expense / days_passed;

    let balance = (income_total - expense_total).max(0.0);
    let survival = survival_prediction(
        balance,
        average_daily_spend,
        remaining_days,
        settings.warning_margin_days,
    );

    let categories = category_totals(expenses.iter().copied());
    let weekday_values = weekday_totals(expenses.iter().copied());
    let weekdays: Vec<(String, f64)> = WEEKDAYS
        .iter()
        .zip(weekday_values)
        .map(|(day, total)| (weekday_name(*day).to_string(), total))
        .collect();

    let behaviour = behaviour_insights(
        &categories,
        &weekdays,
        month_expenses.len(),
        average_daily_spend,
        &settings.currency_symbol,
    );

    let mix = SpendingMix {
        total_expense: expense_total,
        food_expense: expenses
            .iter()
            .filter(|t| t.category == "Food")
            .map(|t| t.amount)
            .sum(),
        weekend_expense: weekdays
            .iter()
            .filter(|(day, _)| is_weekend_label(day))
            .map(|(_, total)| total)
            .sum(),
        month_transactions: month_expenses.len(),
    };

    let stability_score = survival_adjusted_score(
        income_total,
        expense_total,
        balance,
        survival.survival_days as f64,
        remaining_days as f64,
    );

    let engine = InsightEngine::new();
    let weekly = weekly_insights(transactions, today);
    let suggestions = smart_suggestions(&engine, weekly.as_ref(), settings);
    let findings = engine.analyze_all(&AnalysisContext::new(weekly.as_ref(), settings));

    tracing::debug!(
        survival_days = survival.survival_days,
        level = %survival.level,
        stability_score,
        findings = findings.len(),
        "Built insights report"
    );

    InsightsReport {
        income_total,
        expense_total,
        average_daily_spend,
        smart_rules: smart_rules(&mix, settings),
        categories: categories.into_iter().collect(),
        weekdays: weekdays.into_iter().collect(),
        daily_totals: recent_daily_totals(transactions, INSIGHTS_DAILY_POINTS),
        streak: no_spend_streak(transactions, today),
        survival,
        behaviour,
        stability_score,
        weekly,
        suggestions,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_survival_prediction_levels() {
        let danger = survival_prediction(1000.0, 100.0, 20, 3);
        assert_eq!(danger.survival_days, 10);
        assert_eq!(danger.level, AlertLevel::Danger);
        assert_eq!(danger.message, "You will run out of money in 10 days");

        let close = survival_prediction(2200.0, 100.0, 20, 3);
        assert_eq!(close.level, AlertLevel::Warning);

        let safe = survival_prediction(5000.0, 0.0, 20, 3);
        assert_eq!(safe.survival_days, 999);
        assert_eq!(safe.level, AlertLevel::Success);
        assert_eq!(safe.message, "You are safe for the rest of the month");
    }

    #[test]
    fn test_survival_rounds_half_to_even() {
        assert_eq!(survival_prediction(250.0, 100.0, 20, 3).survival_days, 2);
        assert_eq!(survival_prediction(350.0, 100.0, 20, 3).survival_days, 4);
    }

    #[test]
    fn test_behaviour_insights() {
        let categories = vec![("Food".to_string(), 300.0), ("Travel".to_string(), 300.0)];
        let weekdays = vec![("Monday".to_string(), 50.0), ("Saturday".to_string(), 250.0)];
        let notes = behaviour_insights(&categories, &weekdays, 7, 123.9, "₹");
        assert_eq!(
            notes,
            vec![
                "Most of your money is going to Food.",
                "You spend the most on Saturdays.",
                "You made 7 transactions recently.",
                "Average daily spend is ₹123.",
            ]
        );
    }

    #[test]
    fn test_behaviour_insights_without_spend() {
        let weekdays = vec![("Monday".to_string(), 0.0)];
        let notes = behaviour_insights(&[], &weekdays, 0, 0.0, "₹");
        assert_eq!(
            notes,
            vec!["You made 0 transactions recently.", "Average daily spend is ₹0."]
        );
    }

    #[test]
    fn test_smart_rules() {
        let settings = Settings::default();
        let mix = SpendingMix {
            total_expense: 1000.0,
            food_expense: 555.0,
            weekend_expense: 400.0,
            month_transactions: 16,
        };
        assert_eq!(
            smart_rules(&mix, &settings),
            vec![
                "🍔 Cooking at home could save you ₹166 this month.",
                "⚠️ High weekend spending detected. Carefully plan weekend outings.",
                "🛍️ Frequent micro-spending detected. Try consolidating purchases.",
            ]
        );

        assert_eq!(
            smart_rules(&SpendingMix::default(), &settings),
            vec!["✨ Your spending habits are healthy! Keep it up."]
        );
    }

    #[test]
    fn test_insights_report() {
        // 2024-03-09 is a Saturday
        let txns = vec![
            Transaction::income(d(2024, 3, 1), 10000.0, "Salary"),
            Transaction::expense(d(2024, 3, 9), 600.0, "Food"),
            Transaction::expense(d(2024, 3, 4), 400.0, "Travel"),
        ];
        let report = insights_report(&txns, d(2024, 3, 10), &Settings::default());

        assert_eq!(report.income_total, 10000.0);
        assert_eq!(report.expense_total, 1000.0);
        assert_eq!(report.average_daily_spend, 100.0);
        // 9000 / 100 = 90 days against 21 remaining
        assert_eq!(report.survival.survival_days, 90);
        assert_eq!(report.survival.remaining_days, 21);
        assert_eq!(report.survival.level, AlertLevel::Success);
        // 50 + 27 - 2 + 20
        assert_eq!(report.stability_score, 95);
        assert_eq!(report.streak, 1);
        assert_eq!(report.behaviour[0], "Most of your money is going to Food.");
        assert_eq!(report.behaviour[1], "You spend the most on Saturdays.");
        assert!(report.weekly.is_some());
        assert!(!report.findings.is_empty());
        assert_eq!(report.smart_rules.len(), 2);

        assert_eq!(report.categories.labels, vec!["Food", "Travel"]);
        assert_eq!(report.weekdays.labels.len(), 7);
        assert_eq!(report.weekdays.data[0], 400.0);
        assert_eq!(report.daily_totals.labels, vec!["2024-03-04", "2024-03-09"]);
    }
}
