//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// 2024-03-15, a Friday
fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn march_ledger() -> Ledger {
    let csv = "date,amount,category,type,description
2024-03-01,20000,Salary,income,March stipend
2024-03-02,1200,Food,expense,Dinner out
2024-03-03,800,Shopping,expense,Myntra
2024-03-09,1500,Food,expense,Party
2024-03-11,300,Travel,expense,Metro card
2024-03-12,400,Food,expense,Groceries
2024-03-14,900,Bills,expense,Electricity
2024-02-25,700,Food,expense,Last month
";
    Ledger::load_csv(csv.as_bytes()).unwrap()
}

fn setup_test_app() -> Router {
    let config = ServerConfig {
        allowed_origins: vec![],
        today: Some(test_today()),
    };
    create_router(march_ledger(), Settings::default(), None, config)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ========== Metrics API Tests ==========

#[tokio::test]
async fn test_metrics_for_snapshot() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/metrics",
            serde_json::json!({
                "incomeTotal": 10000,
                "expenseTotal": 6000,
                "currentDayOfMonth": 10,
                "daysInMonth": 30,
                "categoryLabels": ["Food", "Bills"],
                "categoryValues": [4000, 2000],
                "weekdayLabels": null,
                "weekdayValues": null
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["averageDailySpend"], 600.0);
    assert_eq!(json["inferredBalance"], 4000.0);
    assert_eq!(json["status"], "AT_RISK");
    assert_eq!(json["topCategory"], "Food");
    assert_eq!(json["topWeekday"], serde_json::Value::Null);
    assert!(json["gauges"]["balanceHealth"].is_number());
}

// ========== Dashboard API Tests ==========

#[tokio::test]
async fn test_dashboard_default_theme() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["today"], "2024-03-15");
    assert_eq!(json["remaining_days"], 16);
    assert_eq!(json["current_balance"], 14900.0);
    assert_eq!(json["metrics"]["status"], "OPTIMAL");
    assert_eq!(json["theme"], "light");
    assert_eq!(json["palette"]["text"], "#6c757d");
    assert_eq!(json["recent_transactions"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_dashboard_dark_theme() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/dashboard?theme=Dark")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["palette"]["grid"], "rgba(255,255,255,0.05)");
}

#[tokio::test]
async fn test_dashboard_rejects_unknown_theme() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/dashboard?theme=sepia")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid theme. Use light or dark");
}

#[tokio::test]
async fn test_insights_report() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/insights")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["expense_total"], 5800.0);
    assert_eq!(json["survival"]["message"], "You are safe for the rest of the month");
    assert!(!json["suggestions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chart_data() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/chart_data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    for key in [
        "expense_categories",
        "daily_spending",
        "income_vs_expense",
        "weekly_pattern",
    ] {
        assert!(json[key]["labels"].is_array(), "missing {}", key);
    }
}

// ========== Decision API Tests ==========

#[tokio::test]
async fn test_check_budget() {
    let app = setup_test_app();

    // Safe daily spend: 14900 / 16 days = 931.25
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/check_budget",
            serde_json::json!({"amount": 500}),
        ))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "safe");
    assert_eq!(json["safe_daily_spend"], 931.25);

    let response = app
        .oneshot(post_json(
            "/api/check_budget",
            serde_json::json!({"amount": 1000}),
        ))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "danger");
}

#[tokio::test]
async fn test_should_i_buy() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/should_i_buy",
            serde_json::json!({"item_name": "Phone", "price": 12000}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["item_name"], "Phone");
    assert_eq!(json["post_balance"], 2900.0);
    assert_eq!(json["risk_level"], "HIGH");
    assert_eq!(json["verdict"], "Do NOT buy");
}

#[tokio::test]
async fn test_should_i_buy_defaults_item_name() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/should_i_buy",
            serde_json::json!({"item_name": "  ", "price": 100}),
        ))
        .await
        .unwrap();

    let json = get_body_json(response).await;
    assert_eq!(json["item_name"], "Planned purchase");
    assert_eq!(json["risk_level"], "LOW");
}

#[tokio::test]
async fn test_should_i_buy_invalid_price() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/should_i_buy",
            serde_json::json!({"item_name": "Free lunch", "price": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid price");
}

#[tokio::test]
async fn test_can_i_spend_signals() {
    let app = setup_test_app();

    for (amount, signal) in [(900, "green"), (1200, "yellow"), (5000, "red")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/can_i_spend",
                serde_json::json!({ "amount": amount }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_body_json(response).await;
        assert_eq!(json["signal"], signal, "amount {}", amount);
    }

    let response = app
        .oneshot(post_json(
            "/api/can_i_spend",
            serde_json::json!({"amount": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Ledger API Tests ==========

#[tokio::test]
async fn test_list_transactions() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(get("/api/transactions"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["total"], 8);
    assert_eq!(json["limit"], 10);
    assert_eq!(json["transactions"][0]["date"], "2024-03-14");

    let response = app
        .oneshot(get("/api/transactions?limit=2"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["transactions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_add_transaction() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/transactions",
            serde_json::json!({
                "amount": 1500,
                "category": "Freelance",
                "type": "income",
                "description": "Logo design"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["date"], "2024-03-15");
    assert_eq!(json["type"], "income");

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["current_balance"], 16400.0);
}

#[tokio::test]
async fn test_add_transaction_rejects_bad_amount() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/transactions",
            serde_json::json!({"amount": -5, "category": "Food", "type": "expense"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid amount");
}

#[tokio::test]
async fn test_quick_add() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/quick_add",
            serde_json::json!({"amount": 120, "description": "Uber ride"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["transaction"]["category"], "Travel");
    assert_eq!(json["transaction"]["type"], "expense");
    assert_eq!(json["transaction"]["date"], "2024-03-15");

    let response = app
        .oneshot(post_json(
            "/api/quick_add",
            serde_json::json!({"amount": 0, "description": "Nothing"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid amount");
}

#[tokio::test]
async fn test_smart_import_appends_to_ledger() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/smart_import",
            serde_json::json!({"message": "Rs 250 paid to Zomato"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["amount"], 250.0);
    assert_eq!(json["category"], "Food");
    assert_eq!(json["type"], "expense");
    assert!(json.get("error").is_none());

    let response = app.oneshot(get("/api/transactions")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["total"], 9);
    assert_eq!(json["transactions"][0]["date"], "2024-03-15");
}

#[tokio::test]
async fn test_smart_import_without_amount() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/smart_import",
            serde_json::json!({"message": "Your OTP is 4821"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Could not detect amount");

    let response = app.oneshot(get("/api/transactions")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["total"], 8);
}

// ========== Middleware Tests ==========

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/insights")).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers["content-security-policy"]
        .to_str()
        .unwrap()
        .contains("frame-ancestors 'none'"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
