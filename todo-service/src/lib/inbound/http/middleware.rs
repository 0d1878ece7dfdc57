use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// The one message every token failure maps to. Malformed, expired, badly
/// signed, and unknown-subject tokens are indistinguishable to the caller.
const CREDENTIALS_ERROR: &str = "could not validate credentials";

/// Extension type carrying the authenticated principal in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that resolves the bearer token to a user.
///
/// Validates the token, reads the subject (email) claim, and looks the user
/// up in the directory - exactly one lookup per request. The resolved user is
/// stored in request extensions for handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        credentials_rejection()
    })?;

    let subject_email = claims.sub.as_deref().ok_or_else(|| {
        tracing::warn!("Missing 'sub' claim in token");
        credentials_rejection()
    })?;

    let user = state
        .user_service
        .get_user_by_email(subject_email)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token subject did not resolve to a user");
            credentials_rejection()
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            credentials_rejection()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        credentials_rejection()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        credentials_rejection()
    })
}

fn credentials_rejection() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": CREDENTIALS_ERROR })),
    )
        .into_response()
}
