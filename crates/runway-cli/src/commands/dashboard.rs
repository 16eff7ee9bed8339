//! Dashboard, insights and chart commands

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use runway_core::display::money;
use runway_core::{build_dashboard, chart_data, insights_report, Theme, UiState};

use super::{load_ledger, load_settings};

pub fn cmd_dashboard(
    ledger_path: &Path,
    config: Option<&Path>,
    today: NaiveDate,
    theme: &str,
    json: bool,
) -> Result<()> {
    let theme: Theme = theme
        .parse()
        .map_err(|e: String| anyhow::anyhow!("Invalid --theme: {}", e))?;
    let settings = load_settings(config)?;
    let ledger = load_ledger(ledger_path)?;
    let summary = build_dashboard(&ledger, today, &settings);

    if json {
        let ui = UiState::init(theme);
        let value = serde_json::json!({
            "dashboard": summary,
            "palette": ui.chart_palette(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let symbol = settings.currency_symbol.as_str();
    let c = &summary.captions;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          🛫 Runway Dashboard            │");
    println!("╰─────────────────────────────────────────╯");
    println!("  {}", today.format("%B %Y"));
    println!();
    println!("  Balance:          {}", money(symbol, summary.current_balance));
    println!("  Safe today:       {}", money(symbol, summary.safe_daily_spend));
    println!("  Avg daily spend:  {}", money(symbol, summary.average_daily_spend));
    println!("  Days remaining:   {}", summary.remaining_days);
    println!();
    println!(
        "  Gauges: balance {} | survival {} | savings {} | safe spend {}",
        c.balance_health, c.survival, c.savings, c.safe_spend
    );
    println!("  Stability score:  {}/100", summary.stability_score);
    println!("  No-spend streak:  {} days", summary.streak);
    println!();
    println!("  [{}] {}", summary.alert_level, c.prediction);
    println!("  {}", summary.forecast.message);
    for caption in [&c.top_category, &c.top_weekday, &c.food_alert]
        .into_iter()
        .flatten()
    {
        println!("  • {}", caption);
    }
    println!();
    println!("  💡 Suggestions");
    for suggestion in &summary.suggestions {
        println!("     {}", suggestion);
    }

    if !summary.recent_transactions.is_empty() {
        println!();
        println!("  Recent");
        println!("  ─────────────────────────────────────────");
        for tx in &summary.recent_transactions {
            println!(
                "  {}  {:<8} {:<14} {}",
                tx.date,
                tx.kind.as_str(),
                tx.category,
                money(symbol, tx.amount)
            );
        }
    }
    println!();

    Ok(())
}

pub fn cmd_insights(
    ledger_path: &Path,
    config: Option<&Path>,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let settings = load_settings(config)?;
    let ledger = load_ledger(ledger_path)?;
    let report = insights_report(ledger.transactions(), today, &settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("🔎 Insights");
    println!("   ─────────────────────────────────────────────");
    println!("   [{}] {}", report.survival.level, report.survival.message);
    println!("   Stability score: {}/100", report.stability_score);
    println!("   No-spend streak: {} days", report.streak);
    println!();
    println!("   Behaviour");
    for note in &report.behaviour {
        println!("     • {}", note);
    }
    println!();
    println!("   This month");
    for rule in &report.smart_rules {
        println!("     {}", rule);
    }
    println!();
    println!("   This week");
    for suggestion in &report.suggestions {
        println!("     {}", suggestion);
    }
    println!();

    Ok(())
}

pub fn cmd_charts(ledger_path: &Path, today: NaiveDate) -> Result<()> {
    let ledger = load_ledger(ledger_path)?;
    let data = chart_data(ledger.transactions(), today);
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
