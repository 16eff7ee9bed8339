//! Snapshot metrics handler

use axum::Json;
use runway_core::{compute_metrics, DerivedMetrics, FinancialSnapshot};

/// POST /api/metrics - Derived metrics for a client-supplied snapshot
///
/// Stateless: the ledger is not consulted.
pub async fn compute_snapshot_metrics(
    Json(snapshot): Json<FinancialSnapshot>,
) -> Json<DerivedMetrics> {
    Json(compute_metrics(&snapshot))
}
