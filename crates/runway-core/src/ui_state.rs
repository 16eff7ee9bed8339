//! Presentation state for a dashboard session
//!
//! Theme, sidebar and the set of live charts are held in one explicit value
//! that is created by [`UiState::init`] and released by
//! [`UiState::teardown`]. Renderers read colours from [`UiState::chart_palette`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Charts a dashboard can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    CategoryPie,
    WeekdayBar,
    SpendingTrend,
    BalanceForecast,
    IncomeVsExpense,
    WeeklyPattern,
}

/// Grid and label colours for the current theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPalette {
    pub grid: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    charts: BTreeSet<ChartKind>,
}

impl UiState {
    pub fn init(theme: Theme) -> Self {
        tracing::debug!(theme = %theme, "UI state initialised");
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    /// Record a mounted chart; returns false if it was already registered
    pub fn register_chart(&mut self, chart: ChartKind) -> bool {
        self.charts.insert(chart)
    }

    pub fn charts(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.charts.iter().copied()
    }

    pub fn chart_palette(&self) -> ChartPalette {
        match self.theme {
            Theme::Dark => ChartPalette {
                grid: "rgba(255,255,255,0.05)",
                text: "rgba(253,245,230,0.7)",
            },
            Theme::Light => ChartPalette {
                grid: "rgba(0,0,0,0.05)",
                text: "#6c757d",
            },
        }
    }

    /// Drop every registered chart, returning how many were released
    pub fn teardown(&mut self) -> usize {
        let released = self.charts.len();
        self.charts.clear();
        tracing::debug!(released, "UI state torn down");
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_toggles() {
        let mut state = UiState::init(Theme::Light);
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.chart_palette().grid, "rgba(255,255,255,0.05)");
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state.chart_palette().text, "#6c757d");

        assert!(state.toggle_sidebar());
        assert!(!state.toggle_sidebar());
    }

    #[test]
    fn test_chart_registry() {
        let mut state = UiState::init(Theme::Dark);
        assert!(state.register_chart(ChartKind::CategoryPie));
        assert!(state.register_chart(ChartKind::WeekdayBar));
        assert!(!state.register_chart(ChartKind::CategoryPie));
        assert_eq!(state.charts().count(), 2);

        assert_eq!(state.teardown(), 2);
        assert_eq!(state.charts().count(), 0);
        assert_eq!(state.theme, Theme::Dark);
    }
}
