//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{Config, IndicatorParams};
use crate::indicators::error::IndicatorError;
use crate::indicators::parser::record_symbol;
use crate::indicators::registry::{Indicator, IndicatorKind, IndicatorRegistry, UnknownIndicator};
use crate::metrics::Metrics;
use crate::services::error::ProviderError;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::SignalEngine;

/// Service context shared by every handler.
///
/// Built once at start-up and handed to the router; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<SignalEngine>,
    pub provider: Arc<dyn MarketDataProvider>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(
        config: Config,
        provider: Arc<dyn MarketDataProvider>,
    ) -> Result<Self, prometheus::Error> {
        Ok(Self {
            engine: Arc::new(SignalEngine::from_config(&config)),
            config: Arc::new(config),
            provider,
            metrics: Arc::new(Metrics::new()?),
            start_time: Arc::new(Instant::now()),
        })
    }
}

/// Handler failure, rendered as `{"success": false, "error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Indicator(IndicatorError),
    Provider(ProviderError),
    UnknownIndicator(UnknownIndicator),
    NotFound(String),
}

impl From<IndicatorError> for ApiError {
    fn from(e: IndicatorError) -> Self {
        ApiError::Indicator(e)
    }
}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        ApiError::Provider(e)
    }
}

impl From<UnknownIndicator> for ApiError {
    fn from(e: UnknownIndicator) -> Self {
        ApiError::UnknownIndicator(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Indicator(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::Provider(e) => {
                error!(error = %e, "quote provider failed");
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            ApiError::UnknownIndicator(e) => (StatusCode::NOT_FOUND, e.to_string()),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
        };
        let body = Json(json!({ "success": false, "error": message }));
        (status, body).into_response()
    }
}

fn outcome_label(e: &IndicatorError) -> &'static str {
    match e {
        IndicatorError::Schema { .. } => "schema_error",
        IndicatorError::InsufficientData { .. } => "insufficient_data",
    }
}

/// Liveness: the process is serving requests.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "futures-analysis"
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Current snapshot of every instrument from the provider
async fn get_futures_data(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let quotes = state.provider.fetch_quotes().await?;
    let update_time = quotes
        .first()
        .map(|q| q.updated_at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();

    Ok(Json(json!({
        "success": true,
        "data": quotes,
        "update_time": update_time,
    })))
}

/// Trend verdict over the provider snapshot's closes
async fn get_technical_analysis(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let quotes = state.provider.fetch_quotes().await.map_err(|e| {
        state.metrics.record_analysis("provider_error");
        e
    })?;
    let verdict = state.engine.classify(quotes.as_slice())?;
    state.metrics.record_analysis("ok");

    Ok(Json(json!({
        "success": true,
        "analysis": verdict,
    })))
}

/// Quote of the configured main contract
async fn get_main_contract(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let quotes = state.provider.fetch_quotes().await?;
    let main = quotes
        .into_iter()
        .find(|q| q.symbol == state.config.main_contract)
        .ok_or_else(|| {
            ApiError::NotFound(format!("main contract {}", state.config.main_contract))
        })?;

    Ok(Json(json!({
        "success": true,
        "data": main,
    })))
}

#[derive(Debug, Deserialize)]
pub struct IndicatorRequest {
    pub records: Vec<Value>,
    #[serde(default)]
    pub params: Option<IndicatorParams>,
}

/// Compute one named indicator over caller-supplied records
async fn compute_indicator(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<IndicatorRequest>,
) -> Result<Json<Value>, ApiError> {
    let kind: IndicatorKind = name.parse()?;

    let records = request.records.as_slice();
    let output = match request.params {
        Some(params) => IndicatorRegistry::with_params(params).compute(kind, records),
        None => state.engine.compute(kind, records),
    };
    let output = output.map_err(|e| {
        warn!(indicator = %kind, error = %e, "indicator request rejected");
        state.metrics.record_analysis(outcome_label(&e));
        e
    })?;
    state.metrics.record_analysis("ok");

    Ok(Json(json!({
        "success": true,
        "indicator": kind.name(),
        "category": kind.category(),
        "data": output,
    })))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub symbol: Option<String>,
    pub records: Vec<Value>,
}

/// Full indicator set and verdict over caller-supplied records
async fn analyze_records(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, ApiError> {
    let symbol = request
        .symbol
        .or_else(|| record_symbol(&request.records))
        .unwrap_or_else(|| "UNKNOWN".to_string());

    let report = state
        .engine
        .analyze(&symbol, request.records.as_slice())
        .map_err(|e| {
            warn!(symbol = %symbol, error = %e, "analysis request rejected");
            state.metrics.record_analysis(outcome_label(&e));
            e
        })?;
    state.metrics.record_analysis("ok");

    Ok(Json(json!({
        "success": true,
        "report": report,
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/futures-data", get(get_futures_data))
        .route("/api/technical-analysis", get(get_technical_analysis))
        .route("/api/main-contract", get(get_main_contract))
        .route("/api/indicators/{name}", post(compute_indicator))
        .route("/api/analyze", post(analyze_records))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let port = state.config.port;
    let provider = state.provider.name();
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, provider = provider, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
