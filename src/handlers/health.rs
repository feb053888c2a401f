use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health - liveness check, never calls the backend
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "backend": state.backend.base_url().as_str(),
        }
    }))
}
