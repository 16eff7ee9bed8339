//! No-spend streak

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::models::Transaction;

/// Longest streak considered
pub const MAX_STREAK_DAYS: u32 = 365;

/// Consecutive days without an expense, counting back from `today`
///
/// Income never breaks the streak. Today counts only if it has no expense.
/// Counting stops at the earliest recorded transaction and at
/// [`MAX_STREAK_DAYS`].
pub fn no_spend_streak(transactions: &[Transaction], today: NaiveDate) -> u32 {
    let Some(earliest) = transactions.iter().map(|t| t.date).min() else {
        return 0;
    };

    let expense_dates: HashSet<NaiveDate> = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.date)
        .collect();

    let mut streak = 0;
    let mut current = today;
    while streak < MAX_STREAK_DAYS && current >= earliest && !expense_dates.contains(&current) {
        streak += 1;
        current -= Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_ledger() {
        assert_eq!(no_spend_streak(&[], d(2024, 3, 10)), 0);
    }

    #[test]
    fn test_expense_today_breaks_immediately() {
        let txns = vec![Transaction::expense(d(2024, 3, 10), 10.0, "Food")];
        assert_eq!(no_spend_streak(&txns, d(2024, 3, 10)), 0);
    }

    #[test]
    fn test_counts_back_to_last_expense() {
        let txns = vec![
            Transaction::expense(d(2024, 3, 1), 10.0, "Food"),
            Transaction::expense(d(2024, 3, 6), 10.0, "Food"),
            Transaction::income(d(2024, 3, 8), 500.0, "Salary"),
        ];
        // 10, 9, 8, 7 are clean; 6 has an expense
        assert_eq!(no_spend_streak(&txns, d(2024, 3, 10)), 4);
    }

    #[test]
    fn test_stops_at_earliest_record() {
        let txns = vec![Transaction::income(d(2024, 3, 8), 500.0, "Salary")];
        assert_eq!(no_spend_streak(&txns, d(2024, 3, 10)), 3);
    }

    #[test]
    fn test_capped() {
        let txns = vec![Transaction::income(d(2020, 1, 1), 500.0, "Salary")];
        assert_eq!(no_spend_streak(&txns, d(2024, 3, 10)), MAX_STREAK_DAYS);
    }
}
