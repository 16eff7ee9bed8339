//! Aggregation of raw transactions into a [`FinancialSnapshot`]

use chrono::{Datelike, NaiveDate, Weekday};

use crate::ledger::same_month;
use crate::metrics::FinancialSnapshot;
use crate::models::{Transaction, TransactionType};

/// Weekday buckets in display order
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name ("Monday")
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

/// Sum of amounts per category, in the order categories were first seen
pub fn category_totals<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for tx in transactions {
        match totals.iter_mut().find(|(name, _)| *name == tx.category) {
            Some((_, total)) => *total += tx.amount,
            None => totals.push((tx.category.clone(), tx.amount)),
        }
    }
    totals
}

/// Sum of amounts per weekday, Monday first
pub fn weekday_totals<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> [f64; 7] {
    let mut totals = [0.0; 7];
    for tx in transactions {
        totals[tx.date.weekday().num_days_from_monday() as usize] += tx.amount;
    }
    totals
}

/// Sum of amounts of one type
pub fn total_of<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    kind: TransactionType,
) -> f64 {
    transactions
        .into_iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Build the snapshot for the calendar month containing `today`
///
/// Transactions outside that month are ignored. Category and weekday buckets
/// cover expenses only.
pub fn aggregate_month(transactions: &[Transaction], today: NaiveDate) -> FinancialSnapshot {
    let month: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| same_month(t.date, today))
        .collect();
    let expenses: Vec<&Transaction> = month.iter().copied().filter(|t| t.is_expense()).collect();

    let income_total = total_of(month.iter().copied(), TransactionType::Income);
    let expense_total = total_of(expenses.iter().copied(), TransactionType::Expense);

    let (category_labels, category_values): (Vec<String>, Vec<f64>) =
        category_totals(expenses.iter().copied()).into_iter().unzip();

    let weekday_values = weekday_totals(expenses.iter().copied());

    tracing::debug!(
        month = %today.format("%Y-%m"),
        transactions = month.len(),
        income_total,
        expense_total,
        "Aggregated monthly snapshot"
    );

    FinancialSnapshot {
        income_total,
        expense_total,
        current_day_of_month: today.day() as f64,
        days_in_month: days_in_month(today) as f64,
        category_labels,
        category_values,
        weekday_labels: WEEKDAYS.iter().map(|d| weekday_name(*d).to_string()).collect(),
        weekday_values: weekday_values.to_vec(),
    }
}
