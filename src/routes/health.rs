use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// Liveness only. The sheet store is deliberately not probed here: a dead
/// upstream already surfaces as 502 on the data routes, and probing it would
/// burn quota on every load balancer poll.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
