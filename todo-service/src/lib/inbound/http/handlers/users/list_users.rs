use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::UserData;
use crate::domain::user::models::Page;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<ApiSuccess<UsersListData>, ApiError> {
    let page = Page {
        limit: params.limit.unwrap_or(10),
        offset: params.offset.unwrap_or(0),
    };

    state
        .user_service
        .list_users(page)
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                UsersListData {
                    users: users.iter().map(UserData::from).collect(),
                },
            )
        })
}

/// Offset/limit query parameters for paged listings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersListData {
    pub users: Vec<UserData>,
}
