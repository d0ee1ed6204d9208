use reqwest::StatusCode;
use serde_json::Value;
use virtum::core::chat::similarity;

use super::support::GatewayTestServer;

async fn ask(server: &GatewayTestServer, client: &reqwest::Client, token: &str, message: &str) -> String {
    let response = client
        .post(server.url("/chat"))
        .header("Authorization", format!("Bearer {token}"))
        .json(&serde_json::json!({ "message": message }))
        .send()
        .await
        .expect("chat request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("chat reply should be json");
    body["reply"]
        .as_str()
        .expect("reply should be a string")
        .to_string()
}

#[tokio::test]
async fn chat_answers_by_topic() {
    let server = GatewayTestServer::start().await;
    let client = reqwest::Client::new();
    let token = server.sign_in(&client).await;

    let greeting = ask(&server, &client, &token, "hello").await;
    assert!(
        ["Hello!", "Hi there!", "Hey!"]
            .iter()
            .any(|opener| greeting.starts_with(opener)),
        "unexpected greeting {greeting:?}"
    );

    let heart = ask(&server, &client, &token, "how's my heart rate").await;
    assert!(heart.contains("bpm, which is perfectly normal."));
    assert!(heart.contains("Blood pressure 118/76 mmHg, Oxygen 97%."));

    let pressure = ask(&server, &client, &token, "what's my blood pressure").await;
    assert!(pressure.contains("Status: 🟢 Optimal"));

    let oxygen = ask(&server, &client, &token, "SpO2?").await;
    assert!(oxygen.starts_with("🫁 Blood Oxygen Analysis:"));

    let dashboard = ask(&server, &client, &token, "full report").await;
    assert!(dashboard.starts_with("📊 Complete Health Dashboard"));
}

#[tokio::test]
async fn consecutive_fallbacks_differ() {
    let server = GatewayTestServer::start().await;
    let client = reqwest::Client::new();
    let token = server.sign_in(&client).await;

    let mut previous = ask(&server, &client, &token, "tell me something").await;
    for _ in 0..5 {
        let next = ask(&server, &client, &token, "tell me something").await;
        assert!(
            similarity(&next, &previous) <= 0.6,
            "fallback repeated itself:\n{previous}\n{next}"
        );
        previous = next;
    }
}

#[tokio::test]
async fn chat_without_token_is_401() {
    let server = GatewayTestServer::start().await;
    let response = reqwest::Client::new()
        .post(server.url("/chat"))
        .json(&serde_json::json!({ "message": "hello" }))
        .send()
        .await
        .expect("chat request should complete");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("error should be json");
    assert_eq!(body["error"], "Missing token");
}

#[tokio::test]
async fn chat_with_malformed_json_is_400() {
    let server = GatewayTestServer::start().await;
    let response = reqwest::Client::new()
        .post(server.url("/chat"))
        .header("Authorization", "Bearer demo-token")
        .header("Content-Type", "application/json")
        .body("{\"message\": ")
        .send()
        .await
        .expect("chat request should complete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("error should be json");
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|msg| msg.contains("Invalid JSON"))
    );
}
