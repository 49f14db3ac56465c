//! Tracing setup and the request observer middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "bibliorelay=debug,tower_http=debug";

/// `RUST_LOG` from the process environment, or the default filter.
///
/// Read when called, so `.env` must already be loaded.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs every request before the handler runs and its outcome afterwards.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    tracing::info!(
        "{} - {} {}",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        method,
        uri
    );

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %uri, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::debug!(%method, %uri, status = status.as_u16(), elapsed_ms, "request completed");
    }

    response
}
