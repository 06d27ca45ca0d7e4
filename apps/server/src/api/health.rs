use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::main_lib::AppState;

/// Liveness probe.
async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health/ping", get(ping))
}
