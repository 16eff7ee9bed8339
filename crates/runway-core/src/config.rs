//! Settings for display and insight thresholds
//!
//! ## Configuration Resolution
//!
//! Settings are loaded with a two-layer resolution:
//! 1. An override file (explicit path, `RUNWAY_CONFIG`, or
//!    ~/.config/runway/config.toml)
//! 2. Embedded defaults (compiled into binary)
//!
//! The derived-metrics calculator does not read settings; its constants are fixed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default settings (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/runway.toml");

/// Environment variable naming an override file
pub const CONFIG_ENV: &str = "RUNWAY_CONFIG";

/// Thresholds for suggestions computed over the last 7 days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyThresholds {
    pub food_share: f64,
    pub food_savings_rate: f64,
    pub travel_share: f64,
    pub travel_savings_rate: f64,
    pub shopping_share: f64,
    pub micro_spending_count: usize,
}

impl Default for WeeklyThresholds {
    fn default() -> Self {
        Self {
            food_share: 0.40,
            food_savings_rate: 0.30,
            travel_share: 0.30,
            travel_savings_rate: 0.40,
            shopping_share: 0.25,
            micro_spending_count: 10,
        }
    }
}

/// Thresholds for the monthly smart rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyThresholds {
    pub food_share: f64,
    pub food_savings_rate: f64,
    pub weekend_share: f64,
    pub micro_spending_count: usize,
}

impl Default for MonthlyThresholds {
    fn default() -> Self {
        Self {
            food_share: 0.40,
            food_savings_rate: 0.30,
            weekend_share: 0.30,
            micro_spending_count: 15,
        }
    }
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix for money amounts in captions and suggestions
    pub currency_symbol: String,
    pub weekly: WeeklyThresholds,
    pub monthly: MonthlyThresholds,
    /// Days past month end that still count as "cutting it close"
    pub warning_margin_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            weekly: WeeklyThresholds::default(),
            monthly: MonthlyThresholds::default(),
            warning_margin_days: 3,
        }
    }
}

impl Settings {
    /// Load settings, preferring `override_path`, then `RUNWAY_CONFIG`, then
    /// the platform config dir, then embedded defaults.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let candidate = override_path
            .map(Path::to_path_buf)
            .or(env_path)
            .or_else(default_config_path);

        let content = match candidate {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading settings override");
                fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?
            }
            Some(path) if override_path.is_some() => {
                return Err(Error::Config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        Self::from_toml(&content)
    }

    /// Parse settings from TOML, filling missing keys from defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut settings = Settings::default();

        if let Some(display) = raw.display {
            if let Some(symbol) = display.currency_symbol {
                settings.currency_symbol = symbol;
            }
        }

        if let Some(weekly) = raw.weekly {
            let w = &mut settings.weekly;
            if let Some(v) = weekly.food_share {
                w.food_share = v;
            }
            if let Some(v) = weekly.food_savings_rate {
                w.food_savings_rate = v;
            }
            if let Some(v) = weekly.travel_share {
                w.travel_share = v;
            }
            if let Some(v) = weekly.travel_savings_rate {
                w.travel_savings_rate = v;
            }
            if let Some(v) = weekly.shopping_share {
                w.shopping_share = v;
            }
            if let Some(v) = weekly.micro_spending_count {
                w.micro_spending_count = v;
            }
        }

        if let Some(monthly) = raw.monthly {
            let m = &mut settings.monthly;
            if let Some(v) = monthly.food_share {
                m.food_share = v;
            }
            if let Some(v) = monthly.food_savings_rate {
                m.food_savings_rate = v;
            }
            if let Some(v) = monthly.weekend_share {
                m.weekend_share = v;
            }
            if let Some(v) = monthly.micro_spending_count {
                m.micro_spending_count = v;
            }
        }

        if let Some(forecast) = raw.forecast {
            if let Some(margin) = forecast.warning_margin_days {
                if margin < 0 {
                    return Err(Error::Config(format!(
                        "warning_margin_days must not be negative (got {})",
                        margin
                    )));
                }
                settings.warning_margin_days = margin;
            }
        }

        Ok(settings)
    }
}

/// Default override location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("runway").join("config.toml"))
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    weekly: Option<RawWeekly>,
    monthly: Option<RawMonthly>,
    forecast: Option<RawForecast>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency_symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWeekly {
    food_share: Option<f64>,
    food_savings_rate: Option<f64>,
    travel_share: Option<f64>,
    travel_savings_rate: Option<f64>,
    shopping_share: Option<f64>,
    micro_spending_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawMonthly {
    food_share: Option<f64>,
    food_savings_rate: Option<f64>,
    weekend_share: Option<f64>,
    micro_spending_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    warning_margin_days: Option<i64>,
}
