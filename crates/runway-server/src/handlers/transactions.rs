//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, MAX_PAGE_LIMIT};
use runway_core::dashboard::RECENT_TRANSACTIONS;
use runway_core::{Transaction, TransactionType};

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    RECENT_TRANSACTIONS
}

#[derive(Serialize)]
pub struct TransactionResponse {
    pub transactions: Vec<Transaction>,
    pub total: usize,
    pub limit: usize,
}

/// Body for recording a transaction
#[derive(Debug, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

/// GET /api/transactions - Most recent transactions, newest first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionQuery>,
) -> Json<TransactionResponse> {
    // Input validation: clamp pagination parameters
    let limit = params.limit.clamp(1, MAX_PAGE_LIMIT);

    let ledger = state.ledger.read().await;
    Json(TransactionResponse {
        transactions: ledger.recent(limit),
        total: ledger.len(),
        limit,
    })
}

/// POST /api/transactions - Record an income or expense
pub async fn add_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTransaction>,
) -> Result<Json<Transaction>, AppError> {
    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(AppError::bad_request("Invalid amount"));
    }
    let category = req.category.trim();
    if category.is_empty() {
        return Err(AppError::bad_request("Category is required"));
    }

    let transaction = Transaction {
        date: req.date.unwrap_or_else(|| state.today()),
        amount: req.amount,
        category: category.to_string(),
        kind: req.kind,
        description: req.description,
    };

    tracing::info!(
        date = %transaction.date,
        amount = transaction.amount,
        kind = %transaction.kind,
        "Transaction added"
    );
    state.ledger.write().await.push(transaction.clone());

    Ok(Json(transaction))
}
