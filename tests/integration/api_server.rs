//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and business logic.

#[path = "api_server/test_utils.rs"]
mod test_utils;

use std::sync::Arc;

use futures_analysis::config::Config;
use futures_analysis::services::SampleDataProvider;
use serde_json::{json, Value};

use test_utils::{rising_records, TestApiServer, UnavailableProvider};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "futures-analysis");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn metrics_track_request_count_and_analyses() {
    let app = TestApiServer::new().await;

    for _ in 0..3 {
        let _ = app.server.get("/health").await;
    }
    let _ = app.server.get("/api/technical-analysis").await;

    assert!(app.metrics.http_requests_total.get() >= 4);
    assert_eq!(
        app.metrics.analyses_total.with_label_values(&["ok"]).get(),
        1
    );
}

#[tokio::test]
async fn futures_data_returns_snapshot() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/futures-data").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 8);
    assert_eq!(data[0]["symbol"], "APM");
    assert_eq!(data[0]["close"], 9570.0);
    assert!(body["update_time"].as_str().is_some_and(|t| t.len() == 19));
}

#[tokio::test]
async fn technical_analysis_over_snapshot_is_neutral() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/technical-analysis").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let analysis = &body["analysis"];
    assert_eq!(analysis["overall_trend"], "neutral");
    assert_eq!(analysis["rsi_signal"], "neutral");
    assert_eq!(analysis["macd_signal"], "neutral");
    assert_eq!(analysis["latest_price"], 8450.0);
    assert_eq!(analysis["ma10"], Value::Null);
}

#[tokio::test]
async fn main_contract_lookup() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/main-contract").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["data"]["symbol"], "APM");
    assert_eq!(body["data"]["open_interest"], 152718.0);

    let config = Config {
        main_contract: "CF601".to_string(),
        ..Config::default()
    };
    let app = TestApiServer::with_provider(config, Arc::new(SampleDataProvider)).await;
    let response = app.server.get("/api/main-contract").await;
    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn provider_failure_maps_to_bad_gateway() {
    let app = TestApiServer::with_provider(Config::default(), Arc::new(UnavailableProvider)).await;

    for path in ["/api/futures-data", "/api/technical-analysis", "/api/main-contract"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), 502, "{path}");
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("503"));
    }
    assert_eq!(
        app.metrics
            .analyses_total
            .with_label_values(&["provider_error"])
            .get(),
        1
    );
}

#[tokio::test]
async fn compute_named_indicator() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/indicators/rsi")
        .json(&json!({ "records": rising_records(20) }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["indicator"], "rsi");
    assert_eq!(body["category"], "momentum");
    let data = body["data"].as_array().expect("series");
    assert_eq!(data.len(), 20);
    assert_eq!(data[13], Value::Null);
    assert_eq!(data[14], 100.0);
}

#[tokio::test]
async fn compute_indicator_with_params() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/indicators/bollinger")
        .json(&json!({
            "records": rising_records(5),
            "params": { "bollinger_period": 3 }
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["category"], "volatility");
    assert_eq!(body["data"]["middle"][2], 9010.0);
    assert_eq!(body["data"]["upper"][1], Value::Null);
}

#[tokio::test]
async fn oversized_period_is_unprocessable() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/indicators/rsi")
        .json(&json!({
            "records": rising_records(20),
            "params": { "rsi_period": u64::MAX }
        }))
        .await;
    assert_eq!(response.status_code(), 422);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_indicator_is_not_found() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/indicators/ichimoku")
        .json(&json!({ "records": rising_records(5) }))
        .await;
    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("ichimoku"));
}

#[tokio::test]
async fn indicator_errors_are_unprocessable() {
    let app = TestApiServer::new().await;

    let response = app
        .server
        .post("/api/indicators/obv")
        .json(&json!({ "records": [{ "close": 1.0 }, { "close": 2.0 }] }))
        .await;
    assert_eq!(response.status_code(), 422);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("volume"));

    let response = app
        .server
        .post("/api/indicators/ma")
        .json(&json!({ "records": rising_records(3) }))
        .await;
    assert_eq!(response.status_code(), 422);
    assert_eq!(
        app.metrics
            .analyses_total
            .with_label_values(&["insufficient_data"])
            .get(),
        1
    );
}

#[tokio::test]
async fn analyze_records_returns_full_report() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "records": rising_records(30) }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let report = &body["report"];
    assert_eq!(report["symbol"], "AP601");
    assert_eq!(report["samples"], 30);
    assert_eq!(report["verdict"]["overall_trend"], "bullish");
    assert_eq!(report["verdict"]["rsi_signal"], "overbought");
    assert_eq!(report["indicators"]["ma20"].as_array().map(Vec::len), Some(30));
    assert_eq!(report["indicators"]["kdj"]["k"].as_array().map(Vec::len), Some(30));
}

#[tokio::test]
async fn analyze_short_history_omits_indicators() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "symbol": "AP605", "records": rising_records(5) }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let report = &body["report"];
    assert_eq!(report["symbol"], "AP605");
    assert_eq!(report["indicators"]["rsi"], Value::Null);
    assert_eq!(report["indicators"]["bollinger"], Value::Null);
    assert_eq!(report["verdict"]["overall_trend"], "neutral");
}

#[tokio::test]
async fn analyze_rejects_records_without_volume() {
    let app = TestApiServer::new().await;
    let records: Vec<Value> = (0..25)
        .map(|i| json!({ "high": 11.0, "low": 9.0, "close": 10.0 + i as f64 }))
        .collect();
    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "records": records }))
        .await;
    assert_eq!(response.status_code(), 422);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}
