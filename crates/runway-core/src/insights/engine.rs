//! Insight Engine - runs the registered analyzers over a weekly summary

use crate::config::Settings;
use crate::Result;

use super::types::{Finding, InsightType};
use super::weekly::WeeklyInsights;
use super::{CategoryShareInsight, MicroSpendingInsight, WeekendSpendingInsight};

/// Context provided to insight analyzers
pub struct AnalysisContext<'a> {
    /// Last week's expense summary, `None` when nothing was spent
    pub weekly: Option<&'a WeeklyInsights>,
    /// Thresholds and currency symbol
    pub settings: &'a Settings,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(weekly: Option<&'a WeeklyInsights>, settings: &'a Settings) -> Self {
        Self { weekly, settings }
    }
}

/// Trait for insight analyzers
pub trait Insight: Send + Sync {
    /// Unique identifier for this insight type
    fn id(&self) -> InsightType;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze data and produce findings
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>>;
}

/// The main insight engine that orchestrates analysis
pub struct InsightEngine {
    insights: Vec<Box<dyn Insight>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create a new insight engine with built-in insight types
    pub fn new() -> Self {
        let mut engine = Self { insights: vec![] };

        // Registration order is the order suggestions are listed in
        engine.register(Box::new(CategoryShareInsight::food()));
        engine.register(Box::new(CategoryShareInsight::travel()));
        engine.register(Box::new(MicroSpendingInsight::new()));
        engine.register(Box::new(WeekendSpendingInsight::new()));
        engine.register(Box::new(CategoryShareInsight::shopping()));

        engine
    }

    /// Register an insight analyzer
    pub fn register(&mut self, insight: Box<dyn Insight>) {
        self.insights.push(insight);
    }

    /// Run every analyzer in registration order
    ///
    /// A failing analyzer is logged and skipped.
    pub fn collect(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut all_findings = vec![];

        for insight in &self.insights {
            match insight.analyze(ctx) {
                Ok(findings) => {
                    tracing::debug!(
                        insight = insight.id().as_str(),
                        count = findings.len(),
                        "Insight analysis complete"
                    );
                    all_findings.extend(findings);
                }
                Err(e) => {
                    tracing::warn!(
                        insight = insight.id().as_str(),
                        error = %e,
                        "Insight analysis failed"
                    );
                }
            }
        }

        all_findings
    }

    /// Run all insight analyzers, most severe findings first
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut all_findings = self.collect(ctx);
        // Stable: equal severities keep registration order
        all_findings.sort_by(|a, b| b.severity.priority().cmp(&a.severity.priority()));
        all_findings
    }

    /// Get list of registered insight types
    pub fn insight_types(&self) -> Vec<InsightType> {
        self.insights.iter().map(|i| i.id()).collect()
    }
}

/// Suggestion lines for the dashboard
///
/// Falls back to an invitation to add expenses when nothing was spent this
/// week, and to a well-balanced message when no rule fires.
pub fn smart_suggestions(
    engine: &InsightEngine,
    weekly: Option<&WeeklyInsights>,
    settings: &Settings,
) -> Vec<String> {
    match weekly {
        Some(w) if w.total_spent > 0.0 => {
            let findings = engine.collect(&AnalysisContext::new(Some(w), settings));
            if findings.is_empty() {
                vec!["✨ Great job! Your spending categories look well-balanced this week.".to_string()]
            } else {
                findings.into_iter().map(|f| f.summary).collect()
            }
        }
        _ => vec!["Add some expenses this week to get personalized insights!".to_string()],
    }
}
