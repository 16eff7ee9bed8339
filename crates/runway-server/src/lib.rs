//! Runway Web Server
//!
//! Axum-based JSON API for the Runway dashboard.
//!
//! The ledger is held in memory for the life of the process. It is seeded
//! from a CSV at startup and grows through the import and transaction
//! endpoints.
//!
//! Security features:
//! - Restrictive CORS policy
//! - Input validation (pagination limits, positive amounts)
//! - Security headers on every response
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::info;

use runway_core::{Ledger, Settings};

mod handlers;

/// Maximum pagination limit
pub const MAX_PAGE_LIMIT: usize = 1000;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Fixed evaluation date; the local date is used when unset
    pub today: Option<NaiveDate>,
}

/// Shared application state
pub struct AppState {
    pub ledger: RwLock<Ledger>,
    pub settings: Settings,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(ledger: Ledger, settings: Settings, config: ServerConfig) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            settings,
            config,
        }
    }

    /// Date used for month windows and new transactions
    pub fn today(&self) -> NaiveDate {
        self.config
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Create the application router
pub fn create_router(
    ledger: Ledger,
    settings: Settings,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    let state = Arc::new(AppState::new(ledger, settings, config));

    let api_routes = Router::new()
        // Metrics for a client-supplied snapshot
        .route("/metrics", post(handlers::compute_snapshot_metrics))
        // Dashboard pages
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/insights", get(handlers::get_insights))
        .route("/chart_data", get(handlers::get_chart_data))
        // Ledger
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::add_transaction),
        )
        .route("/quick_add", post(handlers::quick_add_transaction))
        .route("/smart_import", post(handlers::smart_import))
        // Spending decisions
        .route("/check_budget", post(handlers::check_spend_budget))
        .route("/should_i_buy", post(handlers::should_i_buy))
        .route("/can_i_spend", post(handlers::can_spend_today));

    // Security headers
    // CSP: restrict scripts to same-origin, allow inline styles, allow blob: for chart images
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' blob: data:; font-src 'self'; connect-src 'self'; frame-ancestors 'none'"
    );

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    ledger: Ledger,
    settings: Settings,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    info!(
        transactions = ledger.len(),
        currency = %settings.currency_symbol,
        "Ledger ready"
    );

    let app = create_router(ledger, settings, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// API error rendered as `{"error": message}`
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, error = %self.message, "Request rejected");

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests;
