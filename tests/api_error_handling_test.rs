mod common;

use axum::http::StatusCode;
use common::{json_body, recommend_request, send, test_app, test_config};
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_missing_api_key_never_calls_provider() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "unused" })))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&[("LLM_BASE_URL", server.uri().as_str())]);
    let app = test_app(&config);

    let response = send(&app, recommend_request(json!({ "message": "anything" }))).await;
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Cohere API key is not configured" }));

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_missing_openai_key_names_provider() {
    let config = test_config(&[("LLM_PROVIDER", "openai"), ("COHERE_API_KEY", "wrong-one")]);
    let app = test_app(&config);

    let (status, body) =
        json_body(send(&app, recommend_request(json!({ "message": "hi" }))).await).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "OpenAI API key is not configured");
}

#[tokio::test]
async fn test_rate_limited_provider_details_are_relayed() {
    let server = MockServer::start().await;
    let provider_error = json!({ "message": "You are using a Trial key, which is limited to 10 API calls / minute." });

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(429).set_body_json(provider_error.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&[("COHERE_API_KEY", "k"), ("LLM_BASE_URL", server.uri().as_str())]);
    let app = test_app(&config);

    let (status, body) =
        json_body(send(&app, recommend_request(json!({ "message": "poems" }))).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch recommendation");
    assert_eq!(body["details"], provider_error);
}

#[tokio::test]
async fn test_non_json_error_body_is_relayed_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let config = test_config(&[("COHERE_API_KEY", "k"), ("LLM_BASE_URL", server.uri().as_str())]);
    let app = test_app(&config);

    let (status, body) =
        json_body(send(&app, recommend_request(json!({ "message": "poems" }))).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["details"], "Bad Gateway");
}

#[tokio::test]
async fn test_malformed_provider_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let config = test_config(&[
        ("LLM_PROVIDER", "openai"),
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_BASE_URL", server.uri().as_str()),
    ]);
    let app = test_app(&config);

    let (status, body) =
        json_body(send(&app, recommend_request(json!({ "message": "x" }))).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch recommendation");
    assert_eq!(
        body["details"],
        "Provider response did not contain generated text"
    );
}

#[tokio::test]
async fn test_unreachable_provider() {
    // Bind then drop a listener so the port is known to be closed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = test_config(&[("COHERE_API_KEY", "k"), ("LLM_BASE_URL", base_url.as_str())]);
    let app = test_app(&config);

    let (status, body) =
        json_body(send(&app, recommend_request(json!({ "message": "x" }))).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch recommendation");
    let details = body["details"].as_str().expect("details is a message");
    assert!(details.starts_with("Provider request failed"), "{}", details);
}

#[tokio::test]
async fn test_enforced_catalog_rejects_unlisted_book() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "text": "Read Dune by Frank Herbert." })),
        )
        .mount(&server)
        .await;

    let config = test_config(&[
        ("COHERE_API_KEY", "k"),
        ("LLM_BASE_URL", server.uri().as_str()),
        ("ENFORCE_CATALOG", "true"),
    ]);
    let app = test_app(&config);

    let (status, body) =
        json_body(send(&app, recommend_request(json!({ "message": "sci-fi" }))).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["details"], "Recommendation is not in the catalog");
}

#[tokio::test]
async fn test_empty_error_body_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&[("COHERE_API_KEY", "k"), ("LLM_BASE_URL", server.uri().as_str())]);
    let app = test_app(&config);

    let (status, body) =
        json_body(send(&app, recommend_request(json!({ "message": "x" }))).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "Failed to fetch recommendation",
            "details": "Request failed with status code 503"
        })
    );
}
