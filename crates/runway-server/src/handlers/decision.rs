//! Spending decision handlers (budget check, purchase simulation, spend signal)

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState};
use runway_core::{
    aggregate_month, can_i_spend, check_budget, evaluate_purchase, BudgetCheck, PurchaseDecision,
    SpendCheck,
};

#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub price: f64,
}

/// POST /api/check_budget - Is this amount within today's safe spend?
pub async fn check_spend_budget(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AmountRequest>,
) -> Json<BudgetCheck> {
    let today = state.today();
    let ledger = state.ledger.read().await;
    let snapshot = aggregate_month(ledger.transactions(), today);
    Json(check_budget(&snapshot, req.amount))
}

/// POST /api/should_i_buy - Simulate a purchase against this month
pub async fn should_i_buy(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PurchaseRequest>,
) -> Result<Json<PurchaseDecision>, AppError> {
    let today = state.today();
    let ledger = state.ledger.read().await;
    let snapshot = aggregate_month(ledger.transactions(), today);

    let decision = evaluate_purchase(&snapshot, req.item_name.trim(), req.price)
        .map_err(|_| AppError::bad_request("Invalid price"))?;

    tracing::info!(
        item = %decision.item_name,
        price = decision.price,
        risk = %decision.risk_level,
        "Purchase evaluated"
    );

    Ok(Json(decision))
}

/// POST /api/can_i_spend - Green / yellow / red signal for spending today
pub async fn can_spend_today(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AmountRequest>,
) -> Result<Json<SpendCheck>, AppError> {
    let today = state.today();
    let ledger = state.ledger.read().await;
    let snapshot = aggregate_month(ledger.transactions(), today);
    let budget = check_budget(&snapshot, req.amount);
    let balance = (snapshot.income_total - snapshot.expense_total).max(0.0);

    let check = can_i_spend(
        req.amount,
        budget.safe_daily_spend,
        balance,
        snapshot.remaining_days(),
    )
    .map_err(|_| AppError::bad_request("Invalid amount"))?;

    Ok(Json(check))
}
