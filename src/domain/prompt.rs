//! Prompt construction strategies
//!
//! A strategy turns the user's message into a provider-neutral [`Prompt`].
//! The provider integration decides how that prompt is laid out on the wire.

use std::fmt;
use std::str::FromStr;

use super::catalog::catalog_listing;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that recommends books.";

/// Provider-neutral prompt: an optional system turn plus the user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: Option<String>,
    pub user: String,
}

pub trait PromptStrategy: Send + Sync {
    fn kind(&self) -> PromptKind;
    fn build_prompt(&self, message: &str) -> Prompt;
}

/// Restricts recommendations to the fixed book catalog.
///
/// The whole instruction travels in the user turn; there is no system turn.
#[derive(Debug, Clone, Default)]
pub struct CatalogPrompt;

impl PromptStrategy for CatalogPrompt {
    fn kind(&self) -> PromptKind {
        PromptKind::Catalog
    }

    fn build_prompt(&self, message: &str) -> Prompt {
        let user = format!(
            "You are an assistant that only recommends books from this exact list:\n\
             {}\n\n\
             Do not suggest any books outside of this list. \
             If the user asks for a book, pick from this list only.\n\n\
             User: {}",
            catalog_listing(),
            message
        );
        Prompt { system: None, user }
    }
}

/// Open-ended recommendations: fixed system instruction, message passed through.
#[derive(Debug, Clone)]
pub struct OpenPrompt {
    system: String,
}

impl OpenPrompt {
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }
}

impl Default for OpenPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

impl PromptStrategy for OpenPrompt {
    fn kind(&self) -> PromptKind {
        PromptKind::Open
    }

    fn build_prompt(&self, message: &str) -> Prompt {
        Prompt {
            system: Some(self.system.clone()),
            user: message.to_string(),
        }
    }
}

/// Strategy selector as it appears in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptKind {
    #[default]
    Catalog,
    Open,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Catalog => "catalog",
            PromptKind::Open => "open",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog" => Ok(PromptKind::Catalog),
            "open" => Ok(PromptKind::Open),
            other => Err(format!("unknown prompt strategy '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prompt_embeds_message() {
        let prompt = CatalogPrompt.build_prompt("something about whales");
        assert!(prompt.system.is_none());
        assert!(prompt.user.starts_with(
            "You are an assistant that only recommends books from this exact list:\n1984 by George Orwell\n"
        ));
        assert!(prompt.user.contains("Moby Dick by Herman Melville"));
        assert!(prompt.user.contains("pick from this list only.\n\nUser: "));
        assert!(prompt.user.ends_with("User: something about whales"));
    }

    #[test]
    fn test_catalog_prompt_with_empty_message() {
        let prompt = CatalogPrompt.build_prompt("");
        assert!(prompt.user.ends_with("User: "));
    }

    #[test]
    fn test_open_prompt_passes_message_through() {
        let prompt = OpenPrompt::default().build_prompt("a cozy mystery");
        assert_eq!(prompt.system.as_deref(), Some(DEFAULT_SYSTEM_PROMPT));
        assert_eq!(prompt.user, "a cozy mystery");

        let custom = OpenPrompt::new("Only French novels.").build_prompt("hi");
        assert_eq!(custom.system.as_deref(), Some("Only French novels."));
    }

    #[test]
    fn test_prompt_kind_parsing() {
        assert_eq!("catalog".parse::<PromptKind>(), Ok(PromptKind::Catalog));
        assert_eq!(" OPEN ".parse::<PromptKind>(), Ok(PromptKind::Open));
        assert!("freeform".parse::<PromptKind>().is_err());
    }
}
