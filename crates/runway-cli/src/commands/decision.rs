//! Spending decision commands (buy, check, spend)

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use runway_core::{aggregate_month, can_i_spend, check_budget, evaluate_purchase};

use super::load_ledger;

pub fn cmd_buy(ledger_path: &Path, today: NaiveDate, item: &str, price: f64) -> Result<()> {
    let ledger = load_ledger(ledger_path)?;
    let snapshot = aggregate_month(ledger.transactions(), today);
    let decision = evaluate_purchase(&snapshot, item, price)?;

    let icon = match decision.risk_level {
        runway_core::RiskLevel::Low => "✅",
        runway_core::RiskLevel::Medium => "⚠️ ",
        runway_core::RiskLevel::High => "❌",
    };

    println!();
    println!(
        "{} {} for {:.2}: {} ({} risk)",
        icon, decision.item_name, decision.price, decision.verdict, decision.risk_level
    );
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Balance:        {:.2} → {:.2}",
        decision.current_balance, decision.post_balance
    );
    println!(
        "   Safe daily:     {:.2} → {:.2}",
        decision.current_safe_daily, decision.post_safe_daily
    );
    println!(
        "   Survival days:  {:.1} → {:.1}",
        decision.current_survival_days, decision.post_survival_days
    );
    println!(
        "   Stability:      {} → {} ({:+})",
        decision.stability_score_before, decision.stability_score_after, decision.stability_delta
    );
    println!();
    println!("   {}", decision.runout_message);
    println!("   Safe price this month: {:.0}", decision.safe_price);
    println!();

    Ok(())
}

pub fn cmd_check(ledger_path: &Path, today: NaiveDate, amount: f64) -> Result<()> {
    let ledger = load_ledger(ledger_path)?;
    let snapshot = aggregate_month(ledger.transactions(), today);
    let check = check_budget(&snapshot, amount);

    println!(
        "{} (safe daily spend {:.2})",
        check.message, check.safe_daily_spend
    );
    Ok(())
}

pub fn cmd_spend(ledger_path: &Path, today: NaiveDate, amount: f64) -> Result<()> {
    let ledger = load_ledger(ledger_path)?;
    let snapshot = aggregate_month(ledger.transactions(), today);
    let budget = check_budget(&snapshot, amount);
    let balance = (snapshot.income_total - snapshot.expense_total).max(0.0);

    let check = can_i_spend(
        amount,
        budget.safe_daily_spend,
        balance,
        snapshot.remaining_days(),
    )?;

    let icon = match check.signal {
        runway_core::SpendSignal::Green => "🟢",
        runway_core::SpendSignal::Yellow => "🟡",
        runway_core::SpendSignal::Red => "🔴",
    };
    println!("{} {}", icon, check.message);
    println!(
        "   Your new safe spending tomorrow will be {:.2}.",
        check.safe_tomorrow
    );
    Ok(())
}
