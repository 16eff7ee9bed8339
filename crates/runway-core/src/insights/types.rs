//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of insights that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Food dominates the week's spending
    FoodSpending,
    /// Travel dominates the week's spending
    TravelSpending,
    /// Online shopping takes a large share
    ShoppingSpending,
    /// Many small purchases
    MicroSpending,
    /// The most expensive day fell on a weekend
    WeekendSpending,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::FoodSpending => "food_spending",
            InsightType::TravelSpending => "travel_spending",
            InsightType::ShoppingSpending => "shopping_spending",
            InsightType::MicroSpending => "micro_spending",
            InsightType::WeekendSpending => "weekend_spending",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Attention => "attention",
            Severity::Warning => "warning",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Attention => 1,
            Severity::Warning => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A finding produced by an insight analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Type of insight that generated this finding
    pub insight_type: InsightType,
    /// Unique key for deduplication (e.g., "weekly:food")
    pub key: String,
    /// How urgent/important this finding is
    pub severity: Severity,
    /// Short title for the finding (e.g., "Food Spending")
    pub title: String,
    /// One-line suggestion shown to the user
    pub summary: String,
    /// Optional longer explanation with details
    pub detail: Option<String>,
    /// Insight-specific structured data
    pub data: serde_json::Value,
}

impl Finding {
    pub fn new(
        insight_type: InsightType,
        key: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            insight_type,
            key: key.into(),
            severity,
            title: title.into(),
            summary: summary.into(),
            detail: None,
            data: serde_json::Value::Null,
        }
    }

    /// Add optional detail text
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// Data for the category share insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShareData {
    pub category: String,
    pub amount: f64,
    pub share_percent: f64,
    /// Estimated weekly saving, when the rule suggests one
    pub potential_savings: Option<f64>,
}
