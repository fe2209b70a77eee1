use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::state::AppState;

/// GET /health
/// Reports service version and whether the resume store answers.
/// Responds 503 while the database is unreachable.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!("Health check database ping failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let overall = if status.is_success() { "ok" } else { "degraded" };
    let body = json!({
        "status": overall,
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    });

    (status, Json(body))
}
