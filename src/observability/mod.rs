//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and orchestrator produce:
//!     → tracing events (request metadata, upstream failures)
//!     → spans per request (TraceLayer, carries request ID)
//!
//! logging.rs installs the subscriber:
//!     → EnvFilter (RUST_LOG, else configured filter)
//!     → pretty or JSON formatter on stdout
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through every span and outbound call

pub mod logging;

pub use logging::init_logging;
