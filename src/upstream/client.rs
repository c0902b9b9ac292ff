//! HTTP client for the upstream service.
//!
//! # Responsibilities
//! - Resolve request URLs against the configured base URL
//! - Issue GET requests with a per-call deadline
//! - Forward the inbound request ID
//! - Pass the upstream body through as JSON
//!
//! # Design Decisions
//! - The deadline covers connect, headers and body; the call future is
//!   dropped when it expires, which closes its socket
//! - Non-2xx responses are failures, matching the all-or-nothing contract
//! - One pooled `reqwest::Client` is shared by all requests

use std::time::Duration;

use serde_json::Value;
use tokio::time;

use crate::config::UpstreamConfig;
use crate::http::request::X_REQUEST_ID;
use crate::upstream::error::UpstreamError;

/// Client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a client for the given upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("service-two/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    ///
    /// The root path targets the base URL exactly as configured; any other
    /// path is appended after dropping a trailing slash from the base.
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return self.base_url.clone();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// GET `path` and return its body.
    pub async fn get(&self, path: &str, request_id: Option<&str>) -> Result<Value, UpstreamError> {
        let url = self.url_for(path);
        let timeout_ms = self.timeout.as_millis() as u64;

        tracing::debug!(url = %url, timeout_ms, "Calling upstream");

        match time::timeout(self.timeout, self.fetch(&url, request_id)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout { url, timeout_ms }),
        }
    }

    async fn fetch(&self, url: &str, request_id: Option<&str>) -> Result<Value, UpstreamError> {
        let mut request = self.http.get(url);
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::unavailable(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::ErrorResponse {
                url: url.to_string(),
                status,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::unavailable(url, &e))?;

        tracing::debug!(url = %url, status = %status, bytes = text.len(), "Upstream responded");

        Ok(parse_body(text))
    }
}

/// Embed a body as JSON; anything that does not parse is kept as a string.
fn parse_body(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base_url: &str) -> UpstreamClient {
        UpstreamClient::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            timeout_ms: 5000,
        })
        .unwrap()
    }

    #[test]
    fn test_root_uses_base_url_verbatim() {
        assert_eq!(client("http://meu-app-service").url_for("/"), "http://meu-app-service");
        assert_eq!(client("http://svc:8080/api/").url_for("/"), "http://svc:8080/api/");
    }

    #[test]
    fn test_paths_join_without_double_slash() {
        assert_eq!(
            client("http://meu-app-service").url_for("/health"),
            "http://meu-app-service/health"
        );
        assert_eq!(
            client("http://meu-app-service/").url_for("/health"),
            "http://meu-app-service/health"
        );
        assert_eq!(
            client("http://meu-app-service").url_for("health"),
            "http://meu-app-service/health"
        );
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(r#"{"msg":"ok"}"#.to_string()), json!({"msg": "ok"}));
        assert_eq!(parse_body("plain text".to_string()), json!("plain text"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr)).get("/", None).await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(!err.to_string().is_empty());
    }
}
