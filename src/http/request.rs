//! Request identification and per-request metadata.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Echo the request ID on the response
//! - Compute hostname/timestamp metadata once per request
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The hostname is resolved once at startup, never per request
//! - Timestamps use millisecond precision in UTC (`...T12:00:00.000Z`)

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{SecondsFormat, Utc};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::config::SERVICE_NAME;
use crate::http::server::AppState;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that assigns a request ID to requests that arrive without one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Process-level identity, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceIdentity {
    pub hostname: String,
    pub service: &'static str,
}

impl ServiceIdentity {
    /// Resolve the machine hostname, falling back to `"unknown"`.
    pub fn resolve() -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string());
        Self::with_hostname(hostname)
    }

    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            service: SERVICE_NAME,
        }
    }
}

/// Metadata attached to every response, computed once per request.
///
/// The timestamp is taken when the request arrives, before any upstream call.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    pub hostname: String,
    pub service: &'static str,
    pub timestamp: String,
    pub request_id: Option<String>,
}

impl RequestMeta {
    pub fn new(identity: &ServiceIdentity, request_id: Option<String>) -> Self {
        Self {
            hostname: identity.hostname.clone(),
            service: identity.service,
            timestamp: now_iso8601(),
            request_id,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl FromRequestParts<AppState> for RequestMeta {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok(RequestMeta::new(&state.identity, request_id))
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
