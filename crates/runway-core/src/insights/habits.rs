//! Spending habit insights: frequent small purchases and weekend-heavy weeks

use crate::error::Result;
use crate::metrics::is_weekend_label;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity};

/// Flags a week with more transactions than the micro-spending threshold
pub struct MicroSpendingInsight;

impl MicroSpendingInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MicroSpendingInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for MicroSpendingInsight {
    fn id(&self) -> InsightType {
        InsightType::MicroSpending
    }

    fn name(&self) -> &'static str {
        "Micro-spending"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let Some(weekly) = ctx.weekly else {
            return Ok(vec![]);
        };

        if weekly.num_txns <= ctx.settings.weekly.micro_spending_count {
            return Ok(vec![]);
        }

        Ok(vec![Finding::new(
            InsightType::MicroSpending,
            "weekly:micro_spending",
            Severity::Warning,
            self.name(),
            "⚠️ High transaction frequency detected. Beware of micro-spending leaks.",
        )
        .with_detail(format!("{} expenses in the last week", weekly.num_txns))
        .with_data(serde_json::json!({ "num_txns": weekly.num_txns }))])
    }
}

/// Flags a week whose most expensive day was Saturday or Sunday
pub struct WeekendSpendingInsight;

impl WeekendSpendingInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WeekendSpendingInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for WeekendSpendingInsight {
    fn id(&self) -> InsightType {
        InsightType::WeekendSpending
    }

    fn name(&self) -> &'static str {
        "Weekend Spending"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let Some(weekly) = ctx.weekly else {
            return Ok(vec![]);
        };

        if !is_weekend_label(&weekly.expensive_day) {
            return Ok(vec![]);
        }

        Ok(vec![Finding::new(
            InsightType::WeekendSpending,
            "weekly:weekend",
            Severity::Warning,
            self.name(),
            "⚠️ High weekend spending detected. Consider planning weekend budgets in advance.",
        )
        .with_detail(format!("{} was your most expensive day", weekly.expensive_day))
        .with_data(serde_json::json!({ "expensive_day": weekly.expensive_day }))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::insights::weekly::WeeklyInsights;

    fn weekly(num_txns: usize, expensive_day: &str) -> WeeklyInsights {
        WeeklyInsights {
            total_spent: 100.0,
            num_txns,
            avg_daily_spent: 100.0 / 7.0,
            highest_category: "Food".to_string(),
            expensive_day: expensive_day.to_string(),
            categories: vec![],
        }
    }

    #[test]
    fn test_micro_spending_threshold() {
        let settings = Settings::default();

        let ten = weekly(10, "Monday");
        let ctx = AnalysisContext::new(Some(&ten), &settings);
        assert!(MicroSpendingInsight::new().analyze(&ctx).unwrap().is_empty());

        let eleven = weekly(11, "Monday");
        let ctx = AnalysisContext::new(Some(&eleven), &settings);
        let findings = MicroSpendingInsight::new().analyze(&ctx).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].data["num_txns"], 11);
    }

    #[test]
    fn test_weekend_day() {
        let settings = Settings::default();

        let sunday = weekly(1, "Sunday");
        let ctx = AnalysisContext::new(Some(&sunday), &settings);
        assert_eq!(WeekendSpendingInsight::new().analyze(&ctx).unwrap().len(), 1);

        let friday = weekly(1, "Friday");
        let ctx = AnalysisContext::new(Some(&friday), &settings);
        assert!(WeekendSpendingInsight::new().analyze(&ctx).unwrap().is_empty());
    }
}
