use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::prompt::{DEFAULT_SYSTEM_PROMPT, PromptKind};
use crate::modules::integrations::{GenerationSettings, Provider};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_TOKENS: u32 = 200;
const DEFAULT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid LLM_PROVIDER: {0}")]
    Provider(String),
    #[error("Invalid PROMPT_STRATEGY: {0}")]
    PromptStrategy(String),
}

/// Load `.env` from the working directory (or a parent). A missing file is fine.
pub fn load_dotenv() -> Result<(), dotenvy::Error> {
    ignore_missing(dotenvy::dotenv())
}

/// Load a specific env file; variables already set in the process win.
pub fn load_env_file(path: &Path) -> Result<(), dotenvy::Error> {
    ignore_missing(dotenvy::from_path(path))
}

fn ignore_missing<T>(result: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Everything the relay needs, resolved once at startup and passed in explicitly.
#[derive(Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub provider: Provider,
    /// `None` when the provider's key variable is unset or blank
    pub api_key: Option<String>,
    pub base_url: String,
    pub generation: GenerationSettings,
    pub prompt_strategy: PromptKind,
    pub system_prompt: String,
    pub enforce_catalog: bool,
    pub static_dir: PathBuf,
    pub cors_allowed_origins: Vec<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let provider = match var("LLM_PROVIDER") {
            Some(p) => p.parse::<Provider>().map_err(ConfigError::Provider)?,
            None => Provider::default(),
        };

        let prompt_strategy = match var("PROMPT_STRATEGY") {
            Some(s) => s
                .parse::<PromptKind>()
                .map_err(ConfigError::PromptStrategy)?,
            None => PromptKind::default(),
        };

        let generation = GenerationSettings {
            model: var("LLM_MODEL").unwrap_or_else(|| provider.default_model().to_string()),
            max_tokens: var("LLM_MAX_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: var("LLM_TEMPERATURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
        };

        Ok(Self {
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            provider,
            api_key: var(provider.api_key_var()),
            base_url: var("LLM_BASE_URL")
                .unwrap_or_else(|| provider.default_base_url().to_string()),
            generation,
            prompt_strategy,
            system_prompt: var("SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            enforce_catalog: var("ENFORCE_CATALOG")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
                .unwrap_or(false),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

// Keep the key out of logs
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("port", &self.port)
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("generation", &self.generation)
            .field("prompt_strategy", &self.prompt_strategy)
            .field("enforce_catalog", &self.enforce_catalog)
            .field("static_dir", &self.static_dir)
            .finish_non_exhaustive()
    }
}
