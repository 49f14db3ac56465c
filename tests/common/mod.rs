#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use bibliorelay::config::RelayConfig;
use bibliorelay::infrastructure::AppState;
use bibliorelay::server::build_router;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

// Helper to build a config from literal pairs instead of the process environment
pub fn test_config(pairs: &[(&str, &str)]) -> RelayConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RelayConfig::from_lookup(|key| vars.get(key).cloned()).expect("Invalid test config")
}

// Helper to build the full application router for a config
pub fn test_app(config: &RelayConfig) -> Router {
    let state = AppState::new(config).expect("Failed to build app state");
    build_router(state, config)
}

// Helper to build a POST /recommend request
pub fn recommend_request(body: Value) -> Request<Body> {
    Request::builder()
        .uri("/recommend")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

// Helper to read a JSON response body
pub async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, json)
}

pub fn static_dir_arg(dir: &Path) -> String {
    dir.to_string_lossy().into_owned()
}
