use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use virtum::Config;
use virtum::transport::gateway::run_gateway_with_listener;

pub struct GatewayTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
    _workspace: TempDir,
}

impl GatewayTestServer {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(configure: impl FnOnce(&mut Config)) -> Self {
        let workspace = TempDir::new().expect("temp workspace should be created");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral gateway listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral gateway listener should expose local address")
            .port();

        let mut config = Config::default();
        config.config_path = workspace.path().join("config.toml");
        config.gateway.port = port;
        configure(&mut config);

        let host = "127.0.0.1".to_string();
        let config = Arc::new(config);
        let handle =
            tokio::spawn(async move { run_gateway_with_listener(&host, listener, config).await });

        wait_until_gateway_ready(port).await;

        Self {
            port,
            handle,
            _workspace: workspace,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }

    /// Register and log in one account, returning the issued token.
    pub async fn sign_in(&self, client: &reqwest::Client) -> String {
        let registered = client
            .post(self.url("/auth/register"))
            .json(&serde_json::json!({
                "name": "Test User",
                "email": "test@example.com",
                "password": "secret"
            }))
            .send()
            .await
            .expect("register request should complete");
        assert_eq!(registered.status(), StatusCode::OK);

        let login: Value = client
            .post(self.url("/auth/login"))
            .json(&serde_json::json!({ "email": "test@example.com", "password": "secret" }))
            .send()
            .await
            .expect("login request should complete")
            .json()
            .await
            .expect("login response should be json");
        login["token"]
            .as_str()
            .expect("login should issue a token")
            .to_string()
    }
}

impl Drop for GatewayTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_gateway_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let health = client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await;
        if matches!(health, Ok(resp) if resp.status() == StatusCode::OK) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("gateway did not become ready on port {port}");
}
