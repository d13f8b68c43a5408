pub mod debug;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/validate-route", post(validation::validate_route))
        .route("/validate-route/path", post(validation::validate_route_path))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
