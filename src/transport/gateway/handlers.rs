use crate::error::AuthError;
use crate::utils::text::truncate_with_ellipsis;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::Json,
};
use serde_json::Value;

use super::{AppState, ChatBody, LoginBody, RegisterBody, text_of};

type JsonResponse = (StatusCode, Json<Value>);

/// Any non-empty `Authorization` header counts; the token itself is not
/// checked.
fn has_credential(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|raw| !raw.trim().is_empty())
}

fn auth_error_response(error: AuthError) -> JsonResponse {
    let status = match error {
        AuthError::MissingFields => StatusCode::BAD_REQUEST,
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::InvalidCredentials | AuthError::MissingToken => StatusCode::UNAUTHORIZED,
    };
    (status, Json(serde_json::json!({ "error": error.to_string() })))
}

fn invalid_json(rejection: &JsonRejection, expected: &str) -> JsonResponse {
    let err = serde_json::json!({
        "error": format!("Invalid JSON: {}. Expected: {expected}", rejection.body_text())
    });
    (StatusCode::BAD_REQUEST, Json(err))
}

/// GET /health
pub(super) async fn handle_health() -> JsonResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// POST /auth/register
pub(super) async fn handle_register(
    State(state): State<AppState>,
    body: Result<Json<RegisterBody>, JsonRejection>,
) -> JsonResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            return invalid_json(&e, r#"{"name": "...", "email": "...", "password": "..."}"#);
        }
    };

    let name = text_of(body.name.as_ref());
    let email = text_of(body.email.as_ref());
    let password = text_of(body.password.as_ref());
    tracing::info!(
        name = %name,
        email = %email,
        has_password = !password.is_empty(),
        "Registration attempt"
    );

    match state.users.register(&name, &email, &password) {
        Ok(user) => {
            tracing::info!(id = %user.id, email = %user.email, "User registered");
            (StatusCode::OK, Json(serde_json::json!({ "user": user })))
        }
        Err(error) => {
            tracing::warn!(%error, "Registration rejected");
            auth_error_response(error)
        }
    }
}

/// POST /auth/login
pub(super) async fn handle_login(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> JsonResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return invalid_json(&e, r#"{"email": "...", "password": "..."}"#),
    };

    let identifier = text_of(body.email.as_ref());
    let password = text_of(body.password.as_ref());

    match state.users.login(&identifier, &password) {
        Ok(session) => {
            tracing::info!(id = %session.user.id, "User logged in");
            (StatusCode::OK, Json(serde_json::json!(session)))
        }
        Err(error) => {
            tracing::warn!(%error, "Login rejected");
            auth_error_response(error)
        }
    }
}

/// GET /metrics
pub(super) async fn handle_metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> JsonResponse {
    if !has_credential(&headers) {
        return auth_error_response(AuthError::MissingToken);
    }
    (StatusCode::OK, Json(serde_json::json!(state.metrics.snapshot())))
}

/// POST /chat
///
/// A failed generation is retried once against a fresh snapshot before the
/// request fails.
pub(super) async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> JsonResponse {
    if !has_credential(&headers) {
        return auth_error_response(AuthError::MissingToken);
    }

    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return invalid_json(&e, r#"{"message": "..."}"#),
    };
    let message = body.text();

    let metrics = state.metrics.snapshot();
    tracing::info!(message = %message, metrics = ?metrics, "New chat message");

    let reply = state.chat.respond(&message, &metrics).or_else(|error| {
        tracing::error!(%error, "Chat generation failed, retrying with fresh metrics");
        state.chat.respond(&message, &state.metrics.snapshot())
    });

    match reply {
        Ok(reply) => {
            let preview =
                truncate_with_ellipsis(&reply, state.config.observability.reply_log_chars);
            tracing::info!(reply = %preview, "Generated chat reply");
            (StatusCode::OK, Json(serde_json::json!({ "reply": reply })))
        }
        Err(error) => {
            tracing::error!(%error, "Chat generation failed twice");
            let err = serde_json::json!({ "error": "Chat engine unavailable" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(err))
        }
    }
}
