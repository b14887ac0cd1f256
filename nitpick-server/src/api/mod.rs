//! HTTP API handlers

pub mod review;

use axum::Json;
use serde_json::{json, Value};

/// Handle `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
