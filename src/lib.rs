//! service-2: a small HTTP service that answers a fixed set of routes and
//! forwards `/call-service1` and `/chain` to an upstream ("service-1").

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
