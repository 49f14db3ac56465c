//! Modules - external integrations

pub mod integrations;
