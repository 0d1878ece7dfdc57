use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoState;

pub mod create_todo;
pub mod delete_todo;
pub mod list_todos;
pub mod update_todo;

pub use create_todo::create_todo;
pub use delete_todo::delete_todo;
pub use list_todos::list_todos;
pub use update_todo::update_todo;

/// Public representation of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub state: TodoState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Todo> for TodoData {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.as_i64(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            state: todo.state,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}
