//! Derived metrics command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use runway_core::display::DashboardCaptions;
use runway_core::{compute_metrics, FinancialSnapshot};

pub fn cmd_metrics(snapshot_path: &Path, json: bool) -> Result<()> {
    let text = fs::read_to_string(snapshot_path)
        .with_context(|| format!("Failed to read {}", snapshot_path.display()))?;
    let snapshot = FinancialSnapshot::from_json(&text).context("Invalid snapshot")?;
    let metrics = compute_metrics(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    let captions = DashboardCaptions::new(&metrics, "");

    println!();
    println!("📈 Derived Metrics ({})", metrics.status);
    println!("   ─────────────────────────────────────────────");
    println!("   Avg daily spend:    {:.2}", metrics.average_daily_spend);
    println!("   Balance:            {:.2}", metrics.inferred_balance);
    println!("   Survival:           {}", captions.survival);
    println!("   Projected savings:  {:.2}", metrics.projected_monthly_savings);
    println!("   Safe daily spend:   {:.2}", metrics.safe_daily_spend);
    println!();
    println!(
        "   Gauges: balance {} | survival {} | savings {} | safe spend {}",
        captions.balance_health,
        runway_core::display::percent(metrics.gauges.survival),
        runway_core::display::percent(metrics.gauges.savings),
        runway_core::display::percent(metrics.gauges.safe_spend),
    );
    println!();
    println!("   {}", captions.prediction);
    for caption in [&captions.top_category, &captions.top_weekday, &captions.food_alert]
        .into_iter()
        .flatten()
    {
        println!("   • {}", caption);
    }
    println!();

    Ok(())
}
