use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::todo::errors::TodoStateError;
use crate::domain::user::models::UserId;

/// Todo unique identifier type
///
/// Integer identifier assigned by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub i64);

impl TodoId {
    /// Get the raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle state of a todo item.
///
/// Closed enumeration; unknown values are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoState {
    Draft,
    Todo,
    Doing,
    Done,
    Trash,
}

impl TodoState {
    /// Get the state's canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoState::Draft => "draft",
            TodoState::Todo => "todo",
            TodoState::Doing => "doing",
            TodoState::Done => "done",
            TodoState::Trash => "trash",
        }
    }
}

impl Default for TodoState {
    fn default() -> Self {
        TodoState::Todo
    }
}

impl fmt::Display for TodoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoState {
    type Err = TodoStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TodoState::Draft),
            "todo" => Ok(TodoState::Todo),
            "doing" => Ok(TodoState::Doing),
            "done" => Ok(TodoState::Done),
            "trash" => Ok(TodoState::Trash),
            other => Err(TodoStateError::InvalidValue(other.to_string())),
        }
    }
}

/// Todo aggregate entity.
///
/// Owned by exactly one user; the owner reference never changes after
/// creation.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub state: TodoState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New todo row awaiting database insertion.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub state: TodoState,
}

/// Command to create a new todo for the authenticated principal.
#[derive(Debug)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: String,
    pub state: TodoState,
}

/// Command to partially update an existing todo.
///
/// Only provided fields are changed; the owner reference is immutable.
#[derive(Debug, Default)]
pub struct UpdateTodoCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
}

/// Owner-scoped listing filter.
///
/// Title and description are substring matches; state is exact.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
