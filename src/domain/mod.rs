//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest).
//! Only the catalog, prompt strategies, service traits and error types.

pub mod catalog;
pub mod errors;
pub mod prompt;
pub mod services;

pub use errors::RelayError;
pub use prompt::{CatalogPrompt, OpenPrompt, Prompt, PromptKind, PromptStrategy};
pub use services::RecommendationService;
