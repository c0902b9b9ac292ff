//! Response bodies.
//!
//! # Responsibilities
//! - Define the JSON shape of every route's reply
//! - Map orchestration outcomes to status codes
//!
//! # Design Decisions
//! - Field names follow the camelCase wire format (`service2Info`, ...)
//! - Upstream bodies are embedded as opaque JSON values
//! - Upstream error text is exposed as-is in the `error` field

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::http::request::RequestMeta;
use crate::upstream::{ChainOutcome, UpstreamError};

/// `GET /`
#[derive(Debug, Serialize)]
pub struct RootBody {
    pub message: &'static str,
    pub timestamp: String,
    pub hostname: String,
    pub service: &'static str,
}

impl RootBody {
    pub fn new(meta: RequestMeta) -> Self {
        Self {
            message: "Hello from Service 2!",
            timestamp: meta.timestamp,
            hostname: meta.hostname,
            service: meta.service,
        }
    }
}

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub service: &'static str,
}

/// Hostname and time of the instance that handled the request.
#[derive(Debug, Serialize)]
pub struct InstanceInfo {
    pub hostname: String,
    pub timestamp: String,
}

impl From<&RequestMeta> for InstanceInfo {
    fn from(meta: &RequestMeta) -> Self {
        Self {
            hostname: meta.hostname.clone(),
            timestamp: meta.timestamp.clone(),
        }
    }
}

/// `GET /call-service1`, success or failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBody {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub service2_info: InstanceInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service1_response: Option<Value>,
}

/// `GET /chain`, success.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainBody {
    pub message: &'static str,
    pub service2: InstanceInfo,
    pub service1_root: Value,
    pub service1_health: Value,
}

/// Generic failure body: `{message, error}` plus optional instance fields.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<&'static str>,
}

/// `GET /test-logs`
#[derive(Debug, Serialize)]
pub struct TestLogsBody {
    pub message: &'static str,
    pub levels: [&'static str; 4],
    pub timestamp: String,
    pub hostname: String,
    pub service: &'static str,
}

/// Reply for any unrouted path.
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub error: &'static str,
    pub path: String,
}

/// Build the `/call-service1` reply from a single-call outcome.
pub fn single_call_response(
    meta: &RequestMeta,
    outcome: Result<Value, UpstreamError>,
) -> Response {
    match outcome {
        Ok(body) => Json(CallBody {
            message: "Successfully called Service 1",
            error: None,
            service2_info: meta.into(),
            service1_response: Some(body),
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(CallBody {
                message: "Error calling Service 1",
                error: Some(e.to_string()),
                service2_info: meta.into(),
                service1_response: None,
            }),
        )
            .into_response(),
    }
}

/// Build the `/chain` reply. Failures carry no upstream body and no
/// instance info.
pub fn chain_response(
    meta: &RequestMeta,
    outcome: Result<ChainOutcome, UpstreamError>,
) -> Response {
    match outcome {
        Ok(ChainOutcome { root, health }) => Json(ChainBody {
            message: "Chain of calls completed",
            service2: meta.into(),
            service1_root: root,
            service1_health: health,
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: "Error in chain",
                error: e.to_string(),
                timestamp: None,
                hostname: None,
                service: None,
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::ServiceIdentity;
    use serde_json::json;

    fn meta() -> RequestMeta {
        RequestMeta::new(&ServiceIdentity::with_hostname("pod-1"), None)
    }

    #[test]
    fn test_call_body_success_shape() {
        let meta = meta();
        let body = serde_json::to_value(CallBody {
            message: "Successfully called Service 1",
            error: None,
            service2_info: (&meta).into(),
            service1_response: Some(json!({"msg": "ok"})),
        })
        .unwrap();

        assert_eq!(body["service1Response"], json!({"msg": "ok"}));
        assert_eq!(body["service2Info"]["hostname"], "pod-1");
        assert_eq!(body["service2Info"]["timestamp"], meta.timestamp.as_str());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_call_body_failure_shape() {
        let meta = meta();
        let body = serde_json::to_value(CallBody {
            message: "Error calling Service 1",
            error: Some("timeout of 5000ms exceeded".into()),
            service2_info: (&meta).into(),
            service1_response: None,
        })
        .unwrap();

        assert_eq!(body["error"], "timeout of 5000ms exceeded");
        assert!(body.get("service1Response").is_none());
    }

    #[test]
    fn test_chain_body_shape() {
        let body = serde_json::to_value(ChainBody {
            message: "Chain of calls completed",
            service2: (&meta()).into(),
            service1_root: json!({"a": 1}),
            service1_health: json!({"status": "healthy"}),
        })
        .unwrap();

        assert_eq!(body["service1Root"], json!({"a": 1}));
        assert_eq!(body["service1Health"]["status"], "healthy");
        assert_eq!(body["service2"]["hostname"], "pod-1");
    }

    #[test]
    fn test_chain_failure_status() {
        let err = UpstreamError::Timeout {
            url: "http://meu-app-service/health".into(),
            timeout_ms: 5000,
        };
        let response = chain_response(&meta(), Err(err));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
