//! Stand-in for service-1 so service-2 can be run locally.
//!
//! ```text
//! cargo run --example mock-upstream
//! SERVICE1_URL=http://127.0.0.1:8081 cargo run
//! ```

use axum::{routing::get, Json, Router};
use serde_json::json;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        .route(
            "/",
            get(|| async {
                Json(json!({
                    "message": "Hello from Service 1!",
                    "service": "service-1",
                }))
            }),
        )
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "healthy", "service": "service-1" })) }),
        );

    let addr = SocketAddr::from(([127, 0, 0, 1], 8081));
    println!("Mock service-1 listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
