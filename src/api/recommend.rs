use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::RelayError;
use crate::infrastructure::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecommendRequest {
    /// Free-form user request. Not validated: a missing or null field is relayed as an
    /// empty message, and non-string values as their JSON text.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub message: Option<Value>,
}

impl RecommendRequest {
    /// The message as it is embedded in the prompt
    pub fn message_text(&self) -> String {
        match &self.message {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendResponse {
    pub recommendation: String,
}

#[utoipa::path(
    post,
    path = "/recommend",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Generated recommendation", body = RecommendResponse),
        (status = 500, description = "Missing API key or provider failure", body = crate::api::error::ErrorResponse)
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, RelayError> {
    tracing::info!("Received request body: {:?}", payload);
    let message = payload.message_text();

    let recommendation = state.recommender.recommend(&message).await?;
    Ok(Json(RecommendResponse { recommendation }))
}
