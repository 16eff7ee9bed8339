//! Financial stability score (0-100)

/// Shared score for the dashboard and the purchase decision engine
///
/// With income: `50 + savings_ratio * 30 - expense_ratio * 20`.
/// Without income, spending alone pulls the score down by one point per 100.
pub fn stability_score(total_income: f64, total_expense: f64, available_balance: f64) -> u8 {
    let score = if total_income > 0.0 {
        let savings_ratio = available_balance / total_income;
        let expense_ratio = total_expense / total_income;
        50.0 + savings_ratio * 30.0 - expense_ratio * 20.0
    } else {
        50.0 - total_expense / 100.0
    };
    to_score(score)
}

/// Insights-page variant that also rewards covering the rest of the month
///
/// Without income the savings ratio is 0 and the expense ratio 1. Survival
/// that covers `remaining_days` adds 20; falling short subtracts up to 20
/// in proportion to the shortfall.
pub fn survival_adjusted_score(
    total_income: f64,
    total_expense: f64,
    balance: f64,
    survival_days: f64,
    remaining_days: f64,
) -> u8 {
    let (savings_ratio, expense_ratio) = if total_income > 0.0 {
        (balance / total_income, total_expense / total_income)
    } else {
        (0.0, 1.0)
    };

    let mut score = 50.0 + savings_ratio * 30.0 - expense_ratio * 20.0;
    let remaining = remaining_days.max(1.0);
    if survival_days >= remaining {
        score += 20.0;
    } else {
        score -= 20.0 * (1.0 - survival_days / remaining);
    }
    to_score(score)
}

/// Truncate toward zero, then clamp to 0..=100
fn to_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.trunc().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stability_with_income() {
        // savings 0.4 * 30 = 12, expense 0.6 * 20 = 12
        assert_eq!(stability_score(10000.0, 6000.0, 4000.0), 50);
        // 50 + 27 - 2
        assert_eq!(stability_score(10000.0, 1000.0, 9000.0), 75);
    }

    #[test]
    fn test_stability_without_income() {
        assert_eq!(stability_score(0.0, 0.0, 0.0), 50);
        assert_eq!(stability_score(0.0, 1250.0, 0.0), 37);
        assert_eq!(stability_score(0.0, 10000.0, 0.0), 0);
    }

    #[test]
    fn test_stability_clamped() {
        assert_eq!(stability_score(100.0, 0.0, 1000.0), 100);
        assert_eq!(stability_score(100.0, 1000.0, 0.0), 0);
    }

    #[test]
    fn test_survival_adjusted() {
        // base 50 + 12 - 12 = 50; survival 6 of 20 -> -20 * 0.7 = -14
        assert_eq!(survival_adjusted_score(10000.0, 6000.0, 4000.0, 6.0, 20.0), 36);
        // covers the month: +20
        assert_eq!(survival_adjusted_score(10000.0, 6000.0, 4000.0, 25.0, 20.0), 70);
        // no income: 50 - 20 = 30, sentinel survival covers the month
        assert_eq!(survival_adjusted_score(0.0, 0.0, 0.0, 999.0, 10.0), 50);
    }
}
