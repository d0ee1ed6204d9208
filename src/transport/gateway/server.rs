use super::handlers::{
    handle_chat, handle_health, handle_login, handle_metrics, handle_register,
};
use super::{AppState, MAX_BODY_SIZE, REQUEST_TIMEOUT_SECS};

use crate::config::Config;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the demo API would be reachable from other machines.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let listener = bind_listener(host, port).await?;
    run_gateway_with_listener(host, listener, config).await
}

/// Bind a listener on `host`, which may be a name or a bracketed IPv6
/// literal.
async fn bind_listener(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    tokio::net::TcpListener::bind((bare, port))
        .await
        .with_context(|| format!("bind gateway socket on {host}:{port}"))
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    print_gateway_banner(&display_addr);

    let state = AppState::from_config(Arc::clone(&config));
    let app = build_app(state, &config.gateway.cors_origins);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        tokio::signal::ctrl_c().await.ok();
    })
    .await
    .context("serve HTTP gateway")?;

    tracing::info!("Gateway stopped");
    Ok(())
}

fn print_gateway_banner(display_addr: &str) {
    println!("Virtum API listening on {display_addr}");
    println!("  POST /auth/register");
    println!("  POST /auth/login");
    println!("  GET  /metrics");
    println!("  POST /chat");
    println!("  GET  /health");
}

async fn log_request(request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |ConnectInfo(addr)| addr.ip().to_string());
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        from = %peer,
        "Incoming request"
    );
    next.run(request).await
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    if cors_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<_> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
}

pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/auth/register", post(handle_register))
        .route("/auth/login", post(handle_login))
        .route("/metrics", get(handle_metrics))
        .route("/chat", post(handle_chat))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer(cors_origins))
}
