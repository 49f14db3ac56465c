//! Application state containing the relay and shared resources

use std::sync::Arc;

use crate::domain::RecommendationService;
use crate::infrastructure::config::RelayConfig;
use crate::services::RecommendationRelay;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Recommendation relay
    pub recommender: Arc<dyn RecommendationService>,
    /// Whether a provider API key was configured at startup
    pub api_key_present: bool,
}

impl AppState {
    /// Create a new AppState backed by the real provider relay
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let relay = RecommendationRelay::new(config)?;
        Ok(Self::with_service(Arc::new(relay), config.has_api_key()))
    }

    pub fn with_service(recommender: Arc<dyn RecommendationService>, api_key_present: bool) -> Self {
        Self {
            recommender,
            api_key_present,
        }
    }
}
