use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::TokenData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Mint a fresh token for the already-authenticated principal.
pub async fn refresh_token(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let claims = auth::Claims::for_subject(
        principal.user.email.as_str(),
        state.jwt_expiration_minutes,
    );

    let access_token = state
        .authenticator
        .generate_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenData::bearer(access_token),
    ))
}
