//! Service trait definitions
//!
//! The contract the HTTP layer depends on. Implementations live in the
//! services layer.

use async_trait::async_trait;

use super::RelayError;

/// Turns a user message into a book recommendation
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, message: &str) -> Result<String, RelayError>;

    /// Display name of the upstream provider, e.g. "Cohere"
    fn provider_name(&self) -> &'static str;
}
