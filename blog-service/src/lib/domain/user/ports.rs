use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::models::Password;

/// Port for registration, login and session verification.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, username, and password
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `DatabaseError` - Persistence failed, including a duplicate username
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, UserError>;

    /// Check that a username is registered.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn check_username_exists(&self, username: &Username) -> Result<(), UserError>;

    /// Authenticate with username and password and issue a session token.
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, username: &Username, password: &Password) -> Result<String, UserError>;

    /// Verify a session token.
    ///
    /// # Returns
    /// Identifier of the authenticated user
    ///
    /// # Errors
    /// * `Unauthorized` - Token is malformed, forged, or expired
    async fn verify_session(&self, token: &str) -> Result<UserId, UserError>;
}

/// Persistence operations for the user directory.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed (including unique violations)
    async fn create(&self, user: NewUser) -> Result<UserId, UserError>;

    /// Retrieve the user matching both username and stored credential.
    ///
    /// # Returns
    /// Optional user entity (None if either field does not match)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_credentials(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
