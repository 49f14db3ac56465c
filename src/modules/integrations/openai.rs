//! OpenAI-compatible chat completions wire types
//!
//! `POST /v1/chat/completions` with a bearer token. The generated text is
//! `choices[0].message.content`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::GenerationSettings;
use crate::domain::Prompt;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const CHAT_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: String) -> Self {
        Self {
            role: role.to_string(),
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionRequest {
    pub fn from_prompt(prompt: Prompt, settings: &GenerationSettings) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system {
            messages.push(ChatMessage::new("system", system));
        }
        messages.push(ChatMessage::new("user", prompt.user));

        Self {
            model: settings.model.clone(),
            messages,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}

pub fn extract_text(body: &Value) -> Option<String> {
    let parsed: ChatCompletionResponse = serde_json::from_value(body.clone()).ok()?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}
