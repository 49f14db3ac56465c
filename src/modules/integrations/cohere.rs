//! Cohere chat API (v1) wire types
//!
//! `POST /v1/chat` with a bearer token. The generated text comes back in the
//! top-level `text` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::GenerationSettings;
use crate::domain::Prompt;

pub const DEFAULT_BASE_URL: &str = "https://api.cohere.ai";
pub const DEFAULT_MODEL: &str = "command";
pub const CHAT_PATH: &str = "/v1/chat";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CohereChatRequest {
    pub model: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    pub chat_history: Vec<CohereChatTurn>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CohereChatTurn {
    pub role: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct CohereChatResponse {
    text: Option<String>,
}

impl CohereChatRequest {
    /// A system turn becomes Cohere's `preamble`; history is always empty.
    pub fn from_prompt(prompt: Prompt, settings: &GenerationSettings) -> Self {
        Self {
            model: settings.model.clone(),
            message: prompt.user,
            preamble: prompt.system,
            chat_history: Vec::new(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}

pub fn extract_text(body: &Value) -> Option<String> {
    serde_json::from_value::<CohereChatResponse>(body.clone())
        .ok()
        .and_then(|r| r.text)
}
