//! Quick add and smart import handlers
//!
//! Both append to the in-memory ledger dated today.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AppError, AppState};
use runway_core::{interpret_message, quick_add, ImportOutcome, Transaction};

#[derive(Debug, Deserialize)]
pub struct QuickAddRequest {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct QuickAddResponse {
    pub success: bool,
    pub transaction: Transaction,
}

#[derive(Debug, Deserialize)]
pub struct SmartImportRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/quick_add - Record an expense, categorized from its description
pub async fn quick_add_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuickAddRequest>,
) -> Result<Json<QuickAddResponse>, AppError> {
    let transaction = quick_add(&req.description, req.amount, state.today())
        .map_err(|_| AppError::bad_request("Invalid amount"))?;

    info!(
        amount = transaction.amount,
        category = %transaction.category,
        "Quick add"
    );
    state.ledger.write().await.push(transaction.clone());

    Ok(Json(QuickAddResponse {
        success: true,
        transaction,
    }))
}

/// POST /api/smart_import - Record a transaction read from a bank/UPI message
///
/// An unreadable message is reported in the body (`success: false`), not as
/// an HTTP error.
pub async fn smart_import(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SmartImportRequest>,
) -> Json<ImportOutcome> {
    match interpret_message(&req.message) {
        Ok(parsed) => {
            let outcome = ImportOutcome::imported(&parsed);
            info!(
                amount = parsed.amount,
                category = %parsed.category,
                kind = %parsed.kind,
                "Smart import"
            );
            state
                .ledger
                .write()
                .await
                .push(parsed.into_transaction(state.today()));
            Json(outcome)
        }
        Err(e) => {
            warn!(error = %e, "Smart import failed");
            Json(ImportOutcome::failed("Could not detect amount"))
        }
    }
}
