//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Tracing and request logging (logging)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod config;
pub mod logging;
pub mod server;
pub mod state;

pub use state::AppState;
