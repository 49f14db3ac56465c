// Server module - Router assembly and the listening loop

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::get,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;
use crate::infrastructure::config::RelayConfig;
use crate::infrastructure::logging::log_requests;

/// Build the full application: API routes, OpenAPI document, static files.
pub fn build_router(state: AppState, config: &RelayConfig) -> Router {
    let mut cors_allowed_origins = Vec::new();
    for origin in &config.cors_allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => cors_allowed_origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }

    Router::new()
        .merge(api::api_router(state))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(cors_allowed_origins)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Bind `0.0.0.0:<port>` and serve until the process exits
pub async fn run(config: RelayConfig) -> Result<(), String> {
    let state = AppState::new(&config).map_err(|e| format!("Failed to build HTTP client: {}", e))?;
    let app = build_router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Server is running on port {}", config.port);
    tracing::info!(
        "{} API Key present: {}",
        config.provider,
        config.has_api_key()
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}
