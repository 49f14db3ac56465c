use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "bibliorelay",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.recommender.provider_name(),
        "api_key_configured": state.api_key_present
    }))
}
