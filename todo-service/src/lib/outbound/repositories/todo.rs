use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoState;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

const COLUMNS: &str = "id, user_id, title, description, state, created_at, updated_at";

const DEFAULT_LIMIT: i64 = 10;

pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw todos row as stored in Postgres.
#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    user_id: i64,
    title: String,
    description: String,
    state: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = TodoError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: TodoId(row.id),
            user_id: UserId(row.user_id),
            title: row.title,
            description: row.description,
            state: TodoState::from_str(&row.state)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            r#"
            INSERT INTO todos (user_id, title, description, state)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new_todo.user_id.as_i64())
        .bind(&new_todo.title)
        .bind(&new_todo.description)
        .bind(new_todo.state.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM todos
            WHERE id = $1
            "#
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        row.map(Todo::try_from).transpose()
    }

    async fn list(&self, owner: UserId, filter: &TodoFilter) -> Result<Vec<Todo>, TodoError> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM todos WHERE user_id = "));
        query.push_bind(owner.as_i64());

        if let Some(title) = &filter.title {
            query.push(" AND title LIKE ");
            query.push_bind(format!("%{}%", title));
        }
        if let Some(description) = &filter.description {
            query.push(" AND description LIKE ");
            query.push_bind(format!("%{}%", description));
        }
        if let Some(state) = filter.state {
            query.push(" AND state = ");
            query.push_bind(state.as_str());
        }

        query.push(" ORDER BY id LIMIT ");
        query.push_bind(filter.limit.unwrap_or(DEFAULT_LIMIT));
        query.push(" OFFSET ");
        query.push_bind(filter.offset.unwrap_or(0));

        let rows: Vec<TodoRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        // user_id is never part of the SET list: ownership is immutable
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            r#"
            UPDATE todos
            SET title = $2, description = $3, state = $4, updated_at = now()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(todo.id.as_i64())
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.state.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        row.ok_or(TodoError::NotFound)?.try_into()
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound);
        }

        Ok(())
    }
}
