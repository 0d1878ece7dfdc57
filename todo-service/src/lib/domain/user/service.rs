use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ownership::authorize_mutation;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Page;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Map a conflicting record to the field-specific error, username first.
    fn conflict_error(existing: &User, proposed_username: &Username) -> UserError {
        if existing.username == *proposed_username {
            UserError::UsernameTaken
        } else {
            UserError::EmailTaken
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Best-effort pre-check; the unique constraints remain the backstop
        // for concurrent duplicate inserts
        if let Some(existing) = self
            .repository
            .find_conflicting(&command.username, &command.email, None)
            .await?
        {
            return Err(Self::conflict_error(&existing, &command.username));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        self.repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
            })
            .await
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError> {
        self.repository.list(page).await
    }

    async fn update_user(
        &self,
        principal: UserId,
        id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        authorize_mutation(principal, user.id)?;

        if let Some(existing) = self
            .repository
            .find_conflicting(&command.username, &command.email, Some(id))
            .await?
        {
            return Err(Self::conflict_error(&existing, &command.username));
        }

        user.username = command.username;
        user.email = command.email;
        user.password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        self.repository.update(user).await
    }

    async fn delete_user(&self, principal: UserId, id: UserId) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        authorize_mutation(principal, user.id)?;

        self.repository.delete(id).await?;

        Ok(user)
    }
}
