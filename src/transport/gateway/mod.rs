//! Axum-based HTTP gateway for the health API.
//!
//! - Request body size limits (64KB max)
//! - Request timeouts (30s)
//! - CORS, permissive unless origins are configured
//! - One log line per request with method, path and peer address

mod handlers;
mod server;

pub use server::{build_app, run_gateway, run_gateway_with_listener};

use crate::Config;
use crate::auth::UserStore;
use crate::core::{ChatEngine, JitteredMetrics, MetricsSource};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s) -- prevents slow-loris attacks
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub users: Arc<UserStore>,
    pub metrics: Arc<dyn MetricsSource>,
    pub chat: Arc<ChatEngine>,
}

impl AppState {
    /// Fresh user store, jittered metrics and chat history built from `config`.
    pub fn from_config(config: Arc<Config>) -> Self {
        let metrics = Arc::new(JitteredMetrics::new(config.metrics.clone()));
        let chat = Arc::new(ChatEngine::new(&config.chat));
        Self::with_parts(config, metrics, chat)
    }

    pub fn with_parts(
        config: Arc<Config>,
        metrics: Arc<dyn MetricsSource>,
        chat: Arc<ChatEngine>,
    ) -> Self {
        Self {
            config,
            users: Arc::new(UserStore::new()),
            metrics,
            chat,
        }
    }
}

/// Render a loosely typed JSON field as text. Missing and `null` become
/// empty; numbers and booleans keep their JSON spelling.
fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// POST /auth/register body
#[derive(Debug, Default, Deserialize)]
pub struct RegisterBody {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

/// POST /auth/login body. `email` accepts either an email or a name.
#[derive(Debug, Default, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

/// POST /chat body
#[derive(Debug, Default, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatBody {
    pub fn text(&self) -> String {
        text_of(self.message.as_ref())
    }
}
