pub mod error;
pub mod health;
pub mod recommend;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Relay
        .route("/recommend", post(recommend::recommend))
        .with_state(state)
}
