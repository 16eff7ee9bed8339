//! Category Share Insight
//!
//! Flags a category that takes too large a share of the week's spending:
//! - Food above 40% (cook at home to save 30% of it)
//! - Travel above 30% (take the bus to save 40% of it)
//! - Shopping above 25% (cut back on online orders)

use crate::config::Settings;
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{CategoryShareData, Finding, InsightType, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShareRule {
    Food,
    Travel,
    Shopping,
}

impl ShareRule {
    fn category(&self) -> &'static str {
        match self {
            ShareRule::Food => "Food",
            ShareRule::Travel => "Travel",
            ShareRule::Shopping => "Shopping",
        }
    }

    /// Share threshold and optional savings rate
    fn thresholds(&self, settings: &Settings) -> (f64, Option<f64>) {
        let weekly = &settings.weekly;
        match self {
            ShareRule::Food => (weekly.food_share, Some(weekly.food_savings_rate)),
            ShareRule::Travel => (weekly.travel_share, Some(weekly.travel_savings_rate)),
            ShareRule::Shopping => (weekly.shopping_share, None),
        }
    }
}

/// Insight that flags one category's share of weekly spend
pub struct CategoryShareInsight {
    rule: ShareRule,
}

impl CategoryShareInsight {
    pub fn food() -> Self {
        Self {
            rule: ShareRule::Food,
        }
    }

    pub fn travel() -> Self {
        Self {
            rule: ShareRule::Travel,
        }
    }

    pub fn shopping() -> Self {
        Self {
            rule: ShareRule::Shopping,
        }
    }
}

/// Round to two decimal places
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Insight for CategoryShareInsight {
    fn id(&self) -> InsightType {
        match self.rule {
            ShareRule::Food => InsightType::FoodSpending,
            ShareRule::Travel => InsightType::TravelSpending,
            ShareRule::Shopping => InsightType::ShoppingSpending,
        }
    }

    fn name(&self) -> &'static str {
        match self.rule {
            ShareRule::Food => "Food Spending",
            ShareRule::Travel => "Travel Spending",
            ShareRule::Shopping => "Shopping Spending",
        }
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let Some(weekly) = ctx.weekly else {
            return Ok(vec![]);
        };

        let category = self.rule.category();
        let amount = weekly.category_total(category);
        let share = weekly.category_share(category);
        let (threshold, savings_rate) = self.rule.thresholds(ctx.settings);

        if share <= threshold {
            return Ok(vec![]);
        }

        let potential_savings = savings_rate.map(|rate| round_cents(amount * rate));
        let symbol = &ctx.settings.currency_symbol;

        let summary = match (self.rule, potential_savings) {
            (ShareRule::Food, Some(savings)) => format!(
                "🍔 Cooking at home 2 times this week could save {}{}",
                symbol, savings
            ),
            (ShareRule::Travel, Some(savings)) => format!(
                "🚌 Using bus instead of auto 3 times could save {}{}",
                symbol, savings
            ),
            _ => "🛍️ Reduce online shopping orders this week to protect your budget.".to_string(),
        };

        let data = CategoryShareData {
            category: category.to_string(),
            amount,
            share_percent: share * 100.0,
            potential_savings,
        };

        let finding = Finding::new(
            self.id(),
            format!("weekly:{}", category.to_lowercase()),
            Severity::Attention,
            self.name(),
            summary,
        )
        .with_detail(format!(
            "{} is {:.0}% of this week's spending",
            category,
            share * 100.0
        ))
        .with_data(serde_json::to_value(&data).unwrap_or_default());

        Ok(vec![finding])
    }
}
