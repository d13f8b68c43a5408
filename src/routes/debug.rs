use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - liveness probe; reports the active validation config
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let config = state.validator.config();

    Json(json!({
        "status": "ok",
        "validation": {
            "max_deviation_km": config.max_deviation_km,
            "direction_tolerance_deg": config.direction_tolerance_deg,
            "min_overlap_pct": config.min_overlap_pct,
        }
    }))
}
