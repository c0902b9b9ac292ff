//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID, per-request metadata)
//!     → handlers.rs (route dispatch, upstream orchestration)
//!     → response.rs (JSON body shapes)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestMeta, ServiceIdentity, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
