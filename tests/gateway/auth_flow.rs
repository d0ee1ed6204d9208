use reqwest::StatusCode;
use serde_json::Value;

use super::support::GatewayTestServer;

async fn post_json(
    client: &reqwest::Client,
    url: String,
    body: &Value,
) -> (StatusCode, Value) {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .expect("request should complete");
    let status = response.status();
    let body = response.json().await.expect("response should be json");
    (status, body)
}

#[tokio::test]
async fn register_login_and_fetch_metrics() {
    let server = GatewayTestServer::start().await;
    let client = reqwest::Client::new();

    let (status, body) = post_json(
        &client,
        server.url("/auth/register"),
        &serde_json::json!({ "name": " Ada ", "email": "Ada@Example.com", "password": "engine" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "user": { "id": "user-1", "name": "Ada", "email": "ada@example.com" } })
    );

    let (status, body) = post_json(
        &client,
        server.url("/auth/login"),
        &serde_json::json!({ "email": "ada", "password": "engine" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], "demo-token");
    assert_eq!(body["user"]["id"], "user-1");

    let metrics: Value = client
        .get(server.url("/metrics"))
        .header("Authorization", "Bearer demo-token")
        .send()
        .await
        .expect("metrics request should complete")
        .json()
        .await
        .expect("metrics should be json");
    let heart_rate = metrics["heartRate"].as_u64().expect("heartRate is a number");
    assert!((70..=78).contains(&heart_rate));
    assert_eq!(metrics["bloodPressure"], "118/76");
    assert_eq!(metrics["insight"], "Your health metrics are within normal ranges.");
}

#[tokio::test]
async fn register_rejects_missing_and_duplicate() {
    let server = GatewayTestServer::start().await;
    let client = reqwest::Client::new();

    let (status, body) = post_json(
        &client,
        server.url("/auth/register"),
        &serde_json::json!({ "name": "Ada", "email": "ada@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing fields");

    let account = serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "x" });
    let (status, _) = post_json(&client, server.url("/auth/register"), &account).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(&client, server.url("/auth/register"), &account).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let server = GatewayTestServer::start().await;
    let client = reqwest::Client::new();
    server.sign_in(&client).await;

    let (status, body) = post_json(
        &client,
        server.url("/auth/login"),
        &serde_json::json!({ "email": "test@example.com", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = post_json(
        &client,
        server.url("/auth/login"),
        &serde_json::json!({ "email": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing fields");
}

#[tokio::test]
async fn metrics_without_token_is_401() {
    let server = GatewayTestServer::start().await;
    let response = reqwest::Client::new()
        .get(server.url("/metrics"))
        .send()
        .await
        .expect("metrics request should complete");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("error should be json");
    assert_eq!(body["error"], "Missing token");
}
