use reqwest::StatusCode;
use serde_json::Value;

use super::support::GatewayTestServer;

#[tokio::test]
async fn health_is_public() {
    let server = GatewayTestServer::start().await;
    let body: Value = reqwest::get(server.url("/health"))
        .await
        .expect("health request should complete")
        .json()
        .await
        .expect("health should be json");
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let server = GatewayTestServer::start().await;
    let response = reqwest::Client::new()
        .get(server.url("/health"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .expect("health request should complete");
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_restricts_to_configured_origins() {
    let server = GatewayTestServer::start_with(|config| {
        config.gateway.cors_origins = vec!["https://app.example".to_string()];
    })
    .await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(server.url("/health"))
        .header("Origin", "https://app.example")
        .send()
        .await
        .expect("health request should complete");
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://app.example")
    );

    let other = client
        .get(server.url("/health"))
        .header("Origin", "https://evil.example")
        .send()
        .await
        .expect("health request should complete");
    assert!(other.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = GatewayTestServer::start().await;
    let message = "a".repeat(70_000);
    let response = reqwest::Client::new()
        .post(server.url("/chat"))
        .header("Authorization", "Bearer demo-token")
        .json(&serde_json::json!({ "message": message }))
        .send()
        .await
        .expect("chat request should complete");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
