use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::TodoData;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoState;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Query(params): Query<TodoListParams>,
) -> Result<ApiSuccess<TodosListData>, ApiError> {
    let filter = params.try_into_filter()?;

    state
        .todo_service
        .list_todos(principal.user.id, filter)
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            ApiSuccess::new(
                StatusCode::OK,
                TodosListData {
                    todos: todos.iter().map(TodoData::from).collect(),
                },
            )
        })
}

/// Query parameters for listing todos
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoListParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl TodoListParams {
    fn try_into_filter(self) -> Result<TodoFilter, TodoError> {
        let state = self
            .state
            .as_deref()
            .map(str::parse::<TodoState>)
            .transpose()?;

        Ok(TodoFilter {
            title: self.title,
            description: self.description,
            state,
            limit: self.limit,
            offset: self.offset,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodosListData {
    pub todos: Vec<TodoData>,
}
