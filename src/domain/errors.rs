//! Domain error types
//!
//! These errors are framework-agnostic and represent relay-level failures.
//! The HTTP mapping lives in the api layer.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// No API key for the configured provider; detected before any network call
    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: &'static str },

    /// The request never produced an HTTP response (connect, TLS, decode...)
    #[error("Provider request failed: {0}")]
    Transport(String),

    /// Non-2xx answer from the provider
    #[error("Provider returned status {status}")]
    Upstream { status: u16, body: Value },

    /// 2xx answer without the generated text field
    #[error("Provider response did not contain generated text")]
    MalformedResponse { body: Value },

    /// Catalog enforcement is on and the reply names no catalog title
    #[error("Recommendation is not in the catalog")]
    OffCatalog { recommendation: String },
}

impl RelayError {
    /// Provider-specific payload reported to the caller under `details`.
    ///
    /// `None` for configuration errors, which carry no details.
    pub fn details(&self) -> Option<Value> {
        match self {
            RelayError::MissingApiKey { .. } => None,
            RelayError::Upstream { body, .. } => Some(body.clone()),
            other => Some(Value::String(other.to_string())),
        }
    }
}
