use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a new todo owned by the principal.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(
        &self,
        principal: UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// List the principal's todos matching the filter.
    ///
    /// Never returns another user's todos.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(
        &self,
        principal: UserId,
        filter: TodoFilter,
    ) -> Result<Vec<Todo>, TodoError>;

    /// Partially update an existing todo.
    ///
    /// Existence is checked before ownership, so a missing todo is reported
    /// as not found even to a non-owner.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `Forbidden` - Principal does not own the todo
    /// * `DatabaseError` - Database operation failed
    async fn update_todo(
        &self,
        principal: UserId,
        id: TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// Delete an existing todo.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `Forbidden` - Principal does not own the todo
    /// * `DatabaseError` - Database operation failed
    async fn delete_todo(&self, principal: UserId, id: TodoId) -> Result<(), TodoError>;
}

/// Persistence operations for todo aggregate.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist new todo to storage.
    ///
    /// The database assigns the id and timestamps.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoError>;

    /// Retrieve todo by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError>;

    /// Retrieve the owner's todos matching the filter, ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, owner: UserId, filter: &TodoFilter) -> Result<Vec<Todo>, TodoError>;

    /// Update existing todo in storage, refreshing its updated_at.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Remove todo from storage.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}
