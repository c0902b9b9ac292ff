//! Upstream call orchestration.
//!
//! Turns one inbound request into one or two outbound calls and decides the
//! combined outcome. Failures are logged here, with the target URL, before the
//! handler builds its reply.

use serde_json::Value;

use crate::upstream::client::UpstreamClient;
use crate::upstream::error::UpstreamError;

/// Bodies collected by a successful chain call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    pub root: Value,
    pub health: Value,
}

/// Issues and combines calls to the upstream.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    client: UpstreamClient,
}

impl Orchestrator {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// One GET to the upstream root.
    pub async fn single_call(&self, request_id: Option<&str>) -> Result<Value, UpstreamError> {
        tracing::info!(
            request_id = request_id.unwrap_or("unknown"),
            url = %self.client.base_url(),
            "Calling service 1"
        );

        self.client
            .get("/", request_id)
            .await
            .inspect_err(|e| log_failure(request_id, e, "Error calling service 1"))
    }

    /// GET the upstream root and `/health` concurrently.
    ///
    /// Both calls run to completion (or to their own deadline) before the
    /// outcome is decided. If both fail, the root call's error wins.
    pub async fn chain_call(
        &self,
        request_id: Option<&str>,
    ) -> Result<ChainOutcome, UpstreamError> {
        tracing::info!(
            request_id = request_id.unwrap_or("unknown"),
            url = %self.client.base_url(),
            "Starting call chain"
        );

        let (root, health) = tokio::join!(
            self.client.get("/", request_id),
            self.client.get("/health", request_id),
        );

        match (root, health) {
            (Ok(root), Ok(health)) => Ok(ChainOutcome { root, health }),
            (Err(e), _) | (_, Err(e)) => {
                log_failure(request_id, &e, "Error in chain");
                Err(e)
            }
        }
    }
}

fn log_failure(request_id: Option<&str>, e: &UpstreamError, message: &str) {
    tracing::error!(
        request_id = request_id.unwrap_or("unknown"),
        url = %e.url(),
        error = %e,
        timeout = e.is_timeout(),
        unreachable = e.is_unavailable(),
        "{}",
        message
    );
}
