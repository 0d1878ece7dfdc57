use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ownership::authorize_mutation;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for todo operations.
///
/// Concrete implementation of TodoServicePort with dependency injection.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    /// Create a new todo service with an injected repository.
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        principal: UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        self.repository
            .create(NewTodo {
                user_id: principal,
                title: command.title,
                description: command.description,
                state: command.state,
            })
            .await
    }

    async fn list_todos(
        &self,
        principal: UserId,
        filter: TodoFilter,
    ) -> Result<Vec<Todo>, TodoError> {
        self.repository.list(principal, &filter).await
    }

    async fn update_todo(
        &self,
        principal: UserId,
        id: TodoId,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let mut todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound)?;

        authorize_mutation(principal, todo.user_id)?;

        if let Some(title) = command.title {
            todo.title = title;
        }
        if let Some(description) = command.description {
            todo.description = description;
        }
        if let Some(state) = command.state {
            todo.state = state;
        }

        self.repository.update(todo).await
    }

    async fn delete_todo(&self, principal: UserId, id: TodoId) -> Result<(), TodoError> {
        let todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound)?;

        authorize_mutation(principal, todo.user_id)?;

        self.repository.delete(id).await
    }
}
