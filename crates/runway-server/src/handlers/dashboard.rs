//! Dashboard, insights and chart handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use runway_core::ui_state::ChartPalette;
use runway_core::{
    build_dashboard, chart_data, insights_report, ChartData, DashboardSummary, InsightsReport,
    Theme, UiState,
};

/// Query parameters for the dashboard
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Chart colour theme (light or dark)
    pub theme: Option<String>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub theme: Theme,
    pub palette: ChartPalette,
}

/// GET /api/dashboard - Monthly dashboard for the current ledger
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let theme = match params.theme.as_deref() {
        Some(raw) => raw
            .parse::<Theme>()
            .map_err(|_| AppError::bad_request("Invalid theme. Use light or dark"))?,
        None => Theme::default(),
    };

    let today = state.today();
    let ledger = state.ledger.read().await;
    let summary = build_dashboard(&ledger, today, &state.settings);
    let ui = UiState::init(theme);

    Ok(Json(DashboardResponse {
        summary,
        theme,
        palette: ui.chart_palette(),
    }))
}

/// GET /api/insights - Behaviour notes, survival prediction and weekly suggestions
pub async fn get_insights(State(state): State<Arc<AppState>>) -> Json<InsightsReport> {
    let today = state.today();
    let ledger = state.ledger.read().await;
    Json(insights_report(ledger.transactions(), today, &state.settings))
}

/// GET /api/chart_data - Series for the dashboard charts
pub async fn get_chart_data(State(state): State<Arc<AppState>>) -> Json<ChartData> {
    let today = state.today();
    let ledger = state.ledger.read().await;
    Json(chart_data(ledger.transactions(), today))
}
