//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (SERVICE1_URL, PORT, LOG_FORMAT)
//!     → loader.rs (resolve variables, apply defaults)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is an explicit value; nothing reads the environment after startup
//! - All fields have defaults so an empty environment is a valid setup
//! - Validation separates parsing from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{finalize, load_from_env, load_from_lookup, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, TimeoutConfig,
    UpstreamConfig, DEFAULT_UPSTREAM_URL, SERVICE_NAME,
};
