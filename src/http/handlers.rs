//! Route handlers.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::config::SERVICE_NAME;
use crate::http::request::RequestMeta;
use crate::http::response::{
    chain_response, single_call_response, ErrorBody, HealthBody, NotFoundBody, RootBody,
    TestLogsBody,
};
use crate::http::server::AppState;

pub async fn root(meta: RequestMeta) -> Json<RootBody> {
    Json(RootBody::new(meta))
}

/// Liveness probe. Never consults the upstream.
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

pub async fn call_service1(State(state): State<AppState>, meta: RequestMeta) -> Response {
    let outcome = state.orchestrator.single_call(meta.request_id()).await;
    single_call_response(&meta, outcome)
}

pub async fn chain(State(state): State<AppState>, meta: RequestMeta) -> Response {
    let outcome = state.orchestrator.chain_call(meta.request_id()).await;
    chain_response(&meta, outcome)
}

/// Emit one event per level so log shipping can be checked end to end.
pub async fn test_logs(meta: RequestMeta) -> Json<TestLogsBody> {
    let request_id = meta.request_id().unwrap_or("unknown");

    tracing::debug!(request_id, hostname = %meta.hostname, "Test debug log");
    tracing::info!(request_id, hostname = %meta.hostname, user_id = 12345, "Test info log");
    tracing::warn!(request_id, hostname = %meta.hostname, threshold = 80, "Test warning log");
    tracing::error!(request_id, hostname = %meta.hostname, code = "TEST_ERROR", "Test error log");

    Json(TestLogsBody {
        message: "Test logs generated",
        levels: ["debug", "info", "warn", "error"],
        timestamp: meta.timestamp,
        hostname: meta.hostname,
        service: meta.service,
    })
}

pub async fn simulated_error(meta: RequestMeta) -> Response {
    let error = "This is a simulated error for testing";

    tracing::error!(
        request_id = meta.request_id().unwrap_or("unknown"),
        hostname = %meta.hostname,
        error,
        "Simulated error"
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            message: "Simulated error",
            error: error.to_string(),
            timestamp: Some(meta.timestamp),
            hostname: Some(meta.hostname),
            service: Some(meta.service),
        }),
    )
        .into_response()
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "Not found",
            path: uri.path().to_string(),
        }),
    )
}
