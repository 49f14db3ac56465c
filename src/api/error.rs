//! HTTP mapping for relay errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::RelayError;

/// Top-level message for every provider-side failure
pub const FETCH_FAILED: &str = "Failed to fetch recommendation";

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Provider error payload, or the error message when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<Value>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let error = match &self {
            RelayError::MissingApiKey { .. } => self.to_string(),
            _ => FETCH_FAILED.to_string(),
        };
        let body = Json(ErrorResponse {
            error,
            details: self.details(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
