//! Chat-completion provider integrations

pub mod cohere;
pub mod openai;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::domain::Prompt;
use cohere::CohereChatRequest;
use openai::ChatCompletionRequest;

/// Model parameters sent with every request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Cohere,
    OpenAi,
}

impl Provider {
    /// Human-readable name, used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Cohere => "Cohere",
            Provider::OpenAi => "OpenAI",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Provider::Cohere => "COHERE_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Cohere => cohere::DEFAULT_BASE_URL,
            Provider::OpenAi => openai::DEFAULT_BASE_URL,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Cohere => cohere::DEFAULT_MODEL,
            Provider::OpenAi => openai::DEFAULT_MODEL,
        }
    }

    /// Full chat endpoint URL for a given base URL
    pub fn chat_url(&self, base_url: &str) -> String {
        let path = match self {
            Provider::Cohere => cohere::CHAT_PATH,
            Provider::OpenAi => openai::CHAT_PATH,
        };
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }

    pub fn build_request(&self, prompt: Prompt, settings: &GenerationSettings) -> ProviderRequest {
        match self {
            Provider::Cohere => {
                ProviderRequest::Cohere(CohereChatRequest::from_prompt(prompt, settings))
            }
            Provider::OpenAi => {
                ProviderRequest::OpenAi(ChatCompletionRequest::from_prompt(prompt, settings))
            }
        }
    }

    /// Pulls the generated text out of a successful response body
    pub fn extract_text(&self, body: &Value) -> Option<String> {
        match self {
            Provider::Cohere => cohere::extract_text(body),
            Provider::OpenAi => openai::extract_text(body),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cohere" => Ok(Provider::Cohere),
            "openai" => Ok(Provider::OpenAi),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// Provider-specific request payload, serialized as the request body
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ProviderRequest {
    Cohere(CohereChatRequest),
    OpenAi(ChatCompletionRequest),
}
