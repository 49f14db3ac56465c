//! Services Layer
//!
//! Relay logic extracted from HTTP handlers. Handlers reach it through the
//! `RecommendationService` trait held in `AppState`.

pub mod recommendation_service;

pub use recommendation_service::RecommendationRelay;
