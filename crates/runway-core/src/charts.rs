//! Chart-data shaping
//!
//! Each function returns a [`ChartSeries`] of parallel labels/values ready for
//! a chart renderer. Only expenses contribute except in
//! [`income_vs_expense`].

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::aggregate::{category_totals, weekday_name};
use crate::ledger::same_month;
use crate::models::{Transaction, TransactionType};

/// Days covered by the spending trend, not counting today
pub const TREND_DAYS: i64 = 30;

/// Parallel labels and values for one chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

impl FromIterator<(String, f64)> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let (labels, data) = iter.into_iter().unzip();
        Self { labels, data }
    }
}

/// The series served together to the dashboard charts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub expense_categories: ChartSeries,
    pub daily_spending: ChartSeries,
    pub income_vs_expense: ChartSeries,
    pub weekly_pattern: ChartSeries,
}

pub fn chart_data(transactions: &[Transaction], today: NaiveDate) -> ChartData {
    ChartData {
        expense_categories: category_breakdown(transactions, today),
        daily_spending: daily_spending(transactions, today),
        income_vs_expense: income_vs_expense(transactions, today),
        weekly_pattern: weekly_pattern(transactions),
    }
}

fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|t| t.is_expense())
}

fn expense_by_date<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> BTreeMap<NaiveDate, f64> {
    let mut by_date = BTreeMap::new();
    for tx in transactions {
        *by_date.entry(tx.date).or_insert(0.0) += tx.amount;
    }
    by_date
}

/// Daily expense from `today - 30` through `today`, zero-filled, labelled `MM-DD`
pub fn spending_trend(transactions: &[Transaction], today: NaiveDate) -> ChartSeries {
    let start = today - Duration::days(TREND_DAYS);
    let by_date = expense_by_date(expenses(transactions).filter(|t| t.date >= start));

    (0..=TREND_DAYS)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            (
                day.format("%m-%d").to_string(),
                by_date.get(&day).copied().unwrap_or(0.0),
            )
        })
        .collect()
}

/// Expense per category for the month of `today`, first-seen order
pub fn category_breakdown(transactions: &[Transaction], today: NaiveDate) -> ChartSeries {
    category_totals(expenses(transactions).filter(|t| same_month(t.date, today)))
        .into_iter()
        .collect()
}

/// Expense per date for the month of `today`, in date order
pub fn daily_spending(transactions: &[Transaction], today: NaiveDate) -> ChartSeries {
    expense_by_date(expenses(transactions).filter(|t| same_month(t.date, today)))
        .into_iter()
        .map(|(date, total)| (date.format("%Y-%m-%d").to_string(), total))
        .collect()
}

/// The most recent `limit` dates that had any expense, across all history
pub fn recent_daily_totals(transactions: &[Transaction], limit: usize) -> ChartSeries {
    let by_date = expense_by_date(expenses(transactions));
    let skip = by_date.len().saturating_sub(limit);
    by_date
        .into_iter()
        .skip(skip)
        .map(|(date, total)| (date.format("%Y-%m-%d").to_string(), total))
        .collect()
}

/// Income and expense totals for the month, omitting types with no entries
pub fn income_vs_expense(transactions: &[Transaction], today: NaiveDate) -> ChartSeries {
    [TransactionType::Income, TransactionType::Expense]
        .into_iter()
        .filter_map(|kind| {
            let mut matching = transactions
                .iter()
                .filter(|t| t.kind == kind && same_month(t.date, today))
                .peekable();
            matching.peek()?;
            Some((kind.label().to_string(), matching.map(|t| t.amount).sum()))
        })
        .collect()
}

/// All-time expense per weekday, Sunday first, only days with spend
pub fn weekly_pattern(transactions: &[Transaction]) -> ChartSeries {
    let mut totals = [0.0; 7];
    let mut seen = [false; 7];
    for tx in expenses(transactions) {
        let idx = tx.date.weekday().num_days_from_sunday() as usize;
        totals[idx] += tx.amount;
        seen[idx] = true;
    }

    const SUNDAY_FIRST: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    SUNDAY_FIRST
        .iter()
        .enumerate()
        .filter(|(idx, _)| seen[*idx])
        .map(|(idx, day)| (weekday_name(*day).to_string(), totals[idx]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::income(d(2024, 3, 1), 5000.0, "Salary"),
            Transaction::expense(d(2024, 3, 3), 200.0, "Food"),
            Transaction::expense(d(2024, 3, 3), 50.0, "Travel"),
            Transaction::expense(d(2024, 3, 5), 100.0, "Food"),
            Transaction::expense(d(2024, 2, 20), 80.0, "Shopping"),
        ]
    }

    #[test]
    fn test_spending_trend_zero_fills() {
        let trend = spending_trend(&sample(), d(2024, 3, 5));
        assert_eq!(trend.labels.len(), 31);
        assert_eq!(trend.labels.first().unwrap(), "02-04");
        assert_eq!(trend.labels.last().unwrap(), "03-05");
        assert_eq!(*trend.data.last().unwrap(), 100.0);
        assert_eq!(trend.total(), 430.0);
    }

    #[test]
    fn test_category_breakdown_month_only() {
        let series = category_breakdown(&sample(), d(2024, 3, 10));
        assert_eq!(series.labels, vec!["Food", "Travel"]);
        assert_eq!(series.data, vec![300.0, 50.0]);
    }

    #[test]
    fn test_daily_spending_sorted() {
        let series = daily_spending(&sample(), d(2024, 3, 10));
        assert_eq!(series.labels, vec!["2024-03-03", "2024-03-05"]);
        assert_eq!(series.data, vec![250.0, 100.0]);
    }

    #[test]
    fn test_recent_daily_totals_keeps_latest() {
        let series = recent_daily_totals(&sample(), 2);
        assert_eq!(series.labels, vec!["2024-03-03", "2024-03-05"]);

        let all = recent_daily_totals(&sample(), 30);
        assert_eq!(all.labels.len(), 3);
    }

    #[test]
    fn test_income_vs_expense() {
        let series = income_vs_expense(&sample(), d(2024, 3, 10));
        assert_eq!(series.labels, vec!["Income", "Expense"]);
        assert_eq!(series.data, vec![5000.0, 350.0]);

        let february = income_vs_expense(&sample(), d(2024, 2, 25));
        assert_eq!(february.labels, vec!["Expense"]);
    }

    #[test]
    fn test_weekly_pattern_sunday_first() {
        // 03-03 Sunday, 03-05 Tuesday, 02-20 Tuesday
        let series = weekly_pattern(&sample());
        assert_eq!(series.labels, vec!["Sunday", "Tuesday"]);
        assert_eq!(series.data, vec![250.0, 180.0]);
    }

    #[test]
    fn test_empty_inputs() {
        let data = chart_data(&[], d(2024, 3, 10));
        assert!(data.expense_categories.is_empty());
        assert!(data.daily_spending.is_empty());
        assert!(data.income_vs_expense.is_empty());
        assert!(data.weekly_pattern.is_empty());
    }
}
