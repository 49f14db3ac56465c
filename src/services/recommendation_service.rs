//! Recommendation Service - the relay between callers and the chat provider
//!
//! Pure relay logic without the HTTP layer: build the prompt with the
//! configured strategy, call the provider once, extract the generated text.
//! Holds no mutable state, so one instance is shared by every request.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::catalog::find_mentioned_book;
use crate::domain::{
    CatalogPrompt, OpenPrompt, PromptKind, PromptStrategy, RecommendationService, RelayError,
};
use crate::infrastructure::config::RelayConfig;
use crate::modules::integrations::{GenerationSettings, Provider, ProviderRequest};

const USER_AGENT: &str = concat!("bibliorelay/", env!("CARGO_PKG_VERSION"));

pub struct RecommendationRelay {
    provider: Provider,
    api_key: Option<String>,
    chat_url: String,
    generation: GenerationSettings,
    strategy: Arc<dyn PromptStrategy>,
    enforce_catalog: bool,
    client: reqwest::Client,
}

impl RecommendationRelay {
    /// Build a relay with its own HTTP client (default timeouts)
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: &RelayConfig, client: reqwest::Client) -> Self {
        let strategy = strategy_for(config);

        if config.enforce_catalog && strategy.kind() != PromptKind::Catalog {
            tracing::warn!(
                "ENFORCE_CATALOG has no effect with the '{}' prompt strategy",
                strategy.kind()
            );
        }

        Self {
            provider: config.provider,
            api_key: config.api_key.clone(),
            chat_url: config.provider.chat_url(&config.base_url),
            generation: config.generation.clone(),
            strategy,
            enforce_catalog: config.enforce_catalog,
            client,
        }
    }

    /// Message → provider payload, via the configured prompt strategy
    pub fn build_request(&self, message: &str) -> ProviderRequest {
        let prompt = self.strategy.build_prompt(message);
        self.provider.build_request(prompt, &self.generation)
    }

    async fn send(&self, api_key: &str, request: &ProviderRequest) -> Result<Value, RelayError> {
        let response = self
            .client
            .post(&self.chat_url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(error_chain(&e)))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(error_chain(&e)))?;

        let body = if raw.trim().is_empty() && !status.is_success() {
            Value::String(format!(
                "Request failed with status code {}",
                status.as_u16()
            ))
        } else {
            // Non-JSON bodies (proxies, gateways) are relayed as plain strings
            serde_json::from_str::<Value>(&raw).unwrap_or(Value::String(raw))
        };

        if !status.is_success() {
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    fn check_catalog(&self, recommendation: String) -> Result<String, RelayError> {
        if !self.enforce_catalog || self.strategy.kind() != PromptKind::Catalog {
            return Ok(recommendation);
        }

        match find_mentioned_book(&recommendation) {
            Some(book) => {
                tracing::debug!("Recommendation matches catalog entry '{}'", book.title);
                Ok(recommendation)
            }
            None => Err(RelayError::OffCatalog { recommendation }),
        }
    }
}

#[async_trait]
impl RecommendationService for RecommendationRelay {
    async fn recommend(&self, message: &str) -> Result<String, RelayError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!("{} API key is missing!", self.provider);
            return Err(RelayError::MissingApiKey {
                provider: self.provider.display_name(),
            });
        };

        let request = self.build_request(message);

        tracing::info!("Attempting to make request to {}...", self.provider);
        let body = self.send(api_key, &request).await.inspect_err(|e| {
            log_failure(self.provider, e);
        })?;

        tracing::debug!(
            "Full {} response: {}",
            self.provider,
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );

        let recommendation = self
            .provider
            .extract_text(&body)
            .ok_or(RelayError::MalformedResponse { body })
            .and_then(|text| self.check_catalog(text))
            .inspect_err(|e| log_failure(self.provider, e))?;

        tracing::info!("Recommendation: {}", recommendation);
        Ok(recommendation)
    }

    fn provider_name(&self) -> &'static str {
        self.provider.display_name()
    }
}

fn strategy_for(config: &RelayConfig) -> Arc<dyn PromptStrategy> {
    match config.prompt_strategy {
        PromptKind::Catalog => Arc::new(CatalogPrompt),
        PromptKind::Open => Arc::new(OpenPrompt::new(config.system_prompt.clone())),
    }
}

fn log_failure(provider: Provider, error: &RelayError) {
    match error {
        RelayError::Upstream { status, body } => {
            tracing::error!(
                provider = %provider,
                status = *status,
                body = %body,
                "Provider call failed: {}",
                error
            );
        }
        RelayError::MalformedResponse { body } => {
            tracing::error!(provider = %provider, body = %body, "{}", error);
        }
        RelayError::OffCatalog { recommendation } => {
            tracing::error!(provider = %provider, recommendation = %recommendation, "{}", error);
        }
        other => {
            tracing::error!(provider = %provider, "{}", other);
        }
    }
}

/// Error message followed by its sources, e.g. "error sending request: connection refused"
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
