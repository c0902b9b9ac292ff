//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::http::handlers;
use crate::http::request::{
    propagate_request_id_layer, set_request_id_layer, ServiceIdentity, X_REQUEST_ID,
};
use crate::upstream::{Orchestrator, UpstreamClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub identity: Arc<ServiceIdentity>,
}

impl AppState {
    /// Build state for a configuration, resolving the hostname once.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Self::with_identity(config, ServiceIdentity::resolve())
    }

    pub fn with_identity(
        config: &ServiceConfig,
        identity: ServiceIdentity,
    ) -> Result<Self, ServiceError> {
        let client = UpstreamClient::new(&config.upstream).map_err(ServiceError::Client)?;
        Ok(Self {
            orchestrator: Arc::new(Orchestrator::new(client)),
            identity: Arc::new(identity),
        })
    }
}

/// HTTP server for service-2.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let state = AppState::new(&config)?;
        Ok(Self::with_state(config, state))
    }

    pub fn with_state(config: ServiceConfig, state: AppState) -> Self {
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/call-service1", get(handlers::call_service1))
        .route("/chain", get(handlers::chain))
        .route("/test-logs", get(handlers::test_logs))
        .route("/error", get(handlers::simulated_error))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(X_REQUEST_ID)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown");
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id
            )
        }))
        .layer(set_request_id_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        let config = ServiceConfig::default();
        let identity = ServiceIdentity::with_hostname("test-host");
        let state = AppState::with_identity(&config, identity).unwrap();
        build_router(&config, state)
    }

    async fn get_json(router: Router, path: &str) -> (StatusCode, Value, Option<String>) {
        let response = router
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let request_id = response
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap(), request_id)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body, _) = get_json(router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "healthy", "service": "service-2"}));
    }

    #[tokio::test]
    async fn test_root() {
        let (status, body, _) = get_json(router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello from Service 2!");
        assert_eq!(body["hostname"], "test-host");
        assert_eq!(body["service"], "service-2");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_request_id_assigned() {
        let (_, _, request_id) = get_json(router(), "/health").await;
        let request_id = request_id.expect("x-request-id on response");
        assert!(uuid::Uuid::parse_str(&request_id).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_preserved() {
        let response = router()
            .oneshot(
                Request::get("/health")
                    .header(X_REQUEST_ID, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[X_REQUEST_ID], "abc-123");
    }

    #[tokio::test]
    async fn test_test_logs() {
        let (status, body, _) = get_json(router(), "/test-logs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Test logs generated");
        assert_eq!(body["levels"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_simulated_error() {
        let (status, body, _) = get_json(router(), "/error").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "This is a simulated error for testing");
        assert_eq!(body["service"], "service-2");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body, _) = get_json(router(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["path"], "/nope");
    }
}
