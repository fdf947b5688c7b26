//! Service info and health routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use kata_core::{API_PREFIX, SERVICE_NAME, SERVICE_VERSION};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// GET /: service name, version and endpoint map.
pub async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "status": "running",
        "health": format!("{}/health", API_PREFIX),
        "endpoints": {
            "keywords": format!("{}/keywords", API_PREFIX),
            "batch": format!("{}/keywords/batch", API_PREFIX),
        },
    }))
}

/// GET /api/v1/health: unhealthy while the configuration has errors.
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let config_valid = state.config_errors.is_empty();
    let now = Utc::now();
    let uptime_seconds = (now - state.started_at).num_seconds().max(0);
    let status = if config_valid { "healthy" } else { "unhealthy" };

    let mut body = serde_json::json!({
        "status": status,
        "version": SERVICE_VERSION,
        "config_valid": config_valid,
        "uptime_seconds": uptime_seconds,
        "timestamp": now.to_rfc3339(),
    });
    if !config_valid {
        body["details"] = serde_json::json!({ "config_errors": state.config_errors });
    }
    Json(body)
}
