//! Upstream ("service-1") call subsystem.
//!
//! # Data Flow
//! ```text
//! handler (/call-service1, /chain)
//!     → orchestrator.rs (one call, or two calls joined)
//!     → client.rs (GET with per-call deadline, body pass-through)
//!     → error.rs (timeout / unreachable / non-2xx)
//!     → Outcome folded into the JSON reply
//! ```
//!
//! # Design Decisions
//! - Every outbound call has its own deadline; nothing is retried
//! - Chain calls are launched together and both are awaited
//! - Error message text is passed to the caller unchanged

pub mod client;
pub mod error;
pub mod orchestrator;

pub use client::UpstreamClient;
pub use error::UpstreamError;
pub use orchestrator::{ChainOutcome, Orchestrator};
