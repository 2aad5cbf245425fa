use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let redis = if state.redis_connected().await { "up" } else { "down" };

    Json(json!({
        "status": "ok",
        "environment": state.config.environment,
        "redis": redis,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
