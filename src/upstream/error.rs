//! Upstream call failures.

use std::error::Error as StdError;

use axum::http::StatusCode;
use thiserror::Error;

/// Why an outbound call did not produce a usable body.
///
/// `Timeout` and `Unavailable` mean the upstream could not be reached in
/// time; `ErrorResponse` means it answered with a non-2xx status. The
/// `Display` text is what callers see in the `error` field.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("{message}")]
    Unavailable { url: String, message: String },

    #[error("Request failed with status code {}", .status.as_u16())]
    ErrorResponse { url: String, status: StatusCode },
}

impl UpstreamError {
    /// Build an `Unavailable` error from a transport failure, keeping the
    /// full source chain in the message.
    pub fn unavailable(url: impl Into<String>, err: &(dyn StdError + 'static)) -> Self {
        UpstreamError::Unavailable {
            url: url.into(),
            message: error_chain(err),
        }
    }

    /// The URL the failed call targeted.
    pub fn url(&self) -> &str {
        match self {
            UpstreamError::Timeout { url, .. }
            | UpstreamError::Unavailable { url, .. }
            | UpstreamError::ErrorResponse { url, .. } => url,
        }
    }

    /// True when the upstream was never reached in time (connection
    /// failure or deadline).
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, UpstreamError::ErrorResponse { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Timeout { .. })
    }
}

/// Render an error and its sources as `outer: inner: root`.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.1.as_deref().map(|l| l as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_timeout_message() {
        let err = UpstreamError::Timeout {
            url: "http://meu-app-service".into(),
            timeout_ms: 5000,
        };
        assert_eq!(err.to_string(), "timeout of 5000ms exceeded");
        assert!(err.is_timeout());
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_error_response_message() {
        let err = UpstreamError::ErrorResponse {
            url: "http://meu-app-service/health".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.to_string(), "Request failed with status code 503");
        assert!(!err.is_unavailable());
        assert_eq!(err.url(), "http://meu-app-service/health");
    }

    #[test]
    fn test_unavailable_keeps_source_chain() {
        let inner = Layer("Connection refused", None);
        let outer = Layer("error sending request", Some(Box::new(inner)));
        let err = UpstreamError::unavailable("http://127.0.0.1:1", &outer);
        assert_eq!(err.to_string(), "error sending request: Connection refused");
    }
}
