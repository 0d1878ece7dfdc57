use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Page;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create new user with validated credentials.
    ///
    /// Rejects the command before writing when the username or email is
    /// already taken, reporting which field conflicted (username checked
    /// first).
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already in use
    /// * `EmailTaken` - Email is already in use
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// Retrieve user by unique email address.
    ///
    /// Used by login and by bearer-token identity resolution.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;

    /// Retrieve a page of users.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self, page: Page) -> Result<Vec<User>, UserError>;

    /// Replace an existing user's username, email, and password.
    ///
    /// Only the user itself may perform the update. The uniqueness check
    /// excludes the record being updated.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Forbidden` - Principal is not the target user
    /// * `UsernameTaken` - New username is already in use
    /// * `EmailTaken` - New email is already in use
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        principal: UserId,
        id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Delete an existing user and, transitively, all of its todos.
    ///
    /// Only the user itself may perform the deletion.
    ///
    /// # Returns
    /// The deleted user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Forbidden` - Principal is not the target user
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, principal: UserId, id: UserId) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// The database assigns the id and timestamps. Unique-constraint
    /// violations map to the field-specific conflict errors; this is the
    /// backstop for concurrent duplicate inserts that slip past the
    /// service-level pre-check.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already in use
    /// * `EmailTaken` - Email is already in use
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Find a user sharing the given username or email.
    ///
    /// `exclude` skips the record being updated so a user can keep its own
    /// username/email on update.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_conflicting(
        &self,
        username: &Username,
        email: &EmailAddress,
        exclude: Option<UserId>,
    ) -> Result<Option<User>, UserError>;

    /// Retrieve a page of users ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, page: Page) -> Result<Vec<User>, UserError>;

    /// Update existing user in storage, refreshing its updated_at.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameTaken` - New username is already in use
    /// * `EmailTaken` - New email is already in use
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage; dependent todos cascade.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: UserId) -> Result<(), UserError>;
}
