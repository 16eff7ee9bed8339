//! Rolling seven-day spending summary

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::{category_totals, weekday_name};
use crate::metrics::leftmost_argmax;
use crate::models::Transaction;

/// Days looked back from today; the window includes both ends
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// Expense summary for the last week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInsights {
    pub total_spent: f64,
    pub num_txns: usize,
    /// `total_spent / 7`
    pub avg_daily_spent: f64,
    pub highest_category: String,
    /// Weekday with the largest spend ("Saturday")
    pub expensive_day: String,
    /// Per-category totals in first-seen order
    pub categories: Vec<CategoryAmount>,
}

impl WeeklyInsights {
    /// Total for `category`, 0 when absent
    pub fn category_total(&self, category: &str) -> f64 {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
            .unwrap_or(0.0)
    }

    /// Fraction of the week's spend that went to `category`
    pub fn category_share(&self, category: &str) -> f64 {
        if self.total_spent > 0.0 {
            self.category_total(category) / self.total_spent
        } else {
            0.0
        }
    }
}

/// Summarise expenses dated on or after `today - 7`
///
/// Returns `None` when there are no such expenses. Ties for highest category
/// and most expensive day go to whichever was seen first.
pub fn weekly_insights(transactions: &[Transaction], today: NaiveDate) -> Option<WeeklyInsights> {
    let start = today - Duration::days(WEEKLY_WINDOW_DAYS);
    let weekly: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= start)
        .collect();

    if weekly.is_empty() {
        return None;
    }

    let total_spent: f64 = weekly.iter().map(|t| t.amount).sum();
    let categories = category_totals(weekly.iter().copied());
    let highest_category = highest(&categories);

    let mut days: Vec<(String, f64)> = Vec::new();
    for tx in &weekly {
        let name = weekday_name(tx.date.weekday());
        match days.iter_mut().find(|(day, _)| day == name) {
            Some((_, total)) => *total += tx.amount,
            None => days.push((name.to_string(), tx.amount)),
        }
    }
    let expensive_day = highest(&days);

    Some(WeeklyInsights {
        total_spent,
        num_txns: weekly.len(),
        avg_daily_spent: total_spent / WEEKLY_WINDOW_DAYS as f64,
        highest_category,
        expensive_day,
        categories: categories
            .into_iter()
            .map(|(category, amount)| CategoryAmount { category, amount })
            .collect(),
    })
}

fn highest(totals: &[(String, f64)]) -> String {
    let values: Vec<f64> = totals.iter().map(|(_, v)| *v).collect();
    leftmost_argmax(&values)
        .map(|(idx, _)| totals[idx].0.clone())
        .unwrap_or_else(|| "None".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_no_weekly_expenses() {
        let txns = vec![
            Transaction::income(d(2024, 3, 9), 5000.0, "Salary"),
            Transaction::expense(d(2024, 3, 1), 100.0, "Food"),
        ];
        assert!(weekly_insights(&txns, d(2024, 3, 10)).is_none());
        assert!(weekly_insights(&[], d(2024, 3, 10)).is_none());
    }

    #[test]
    fn test_weekly_summary() {
        // 2024-03-09 is a Saturday, 2024-03-04 a Monday
        let txns = vec![
            Transaction::expense(d(2024, 3, 3), 70.0, "Food"),
            Transaction::expense(d(2024, 3, 4), 200.0, "Travel"),
            Transaction::expense(d(2024, 3, 9), 300.0, "Food"),
            Transaction::expense(d(2024, 3, 2), 999.0, "Food"),
        ];
        let weekly = weekly_insights(&txns, d(2024, 3, 10)).unwrap();

        assert_eq!(weekly.num_txns, 3);
        assert_eq!(weekly.total_spent, 570.0);
        assert_eq!(weekly.avg_daily_spent, 570.0 / 7.0);
        assert_eq!(weekly.highest_category, "Food");
        assert_eq!(weekly.expensive_day, "Saturday");
        assert_eq!(weekly.category_total("Food"), 370.0);
        assert_eq!(weekly.category_total("Shopping"), 0.0);
        assert!((weekly.category_share("Travel") - 200.0 / 570.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let txns = vec![
            Transaction::expense(d(2024, 3, 5), 100.0, "Travel"),
            Transaction::expense(d(2024, 3, 6), 100.0, "Food"),
        ];
        let weekly = weekly_insights(&txns, d(2024, 3, 10)).unwrap();
        assert_eq!(weekly.highest_category, "Travel");
        assert_eq!(weekly.expensive_day, "Tuesday");
    }
}
