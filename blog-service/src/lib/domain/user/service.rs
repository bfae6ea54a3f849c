use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and sessions.
///
/// Combines the user directory with the credential hasher and token handler
/// held by the injected `Authenticator`.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User directory implementation
    /// * `authenticator` - Credential hashing and token handling
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.expose());

        let user = NewUser {
            name: command.name,
            username: command.username,
            password_hash,
        };

        let username = user.username.clone();
        let id = self.repository.create(user).await?;

        tracing::info!(user_id = %id, username = %username, "User registered");

        Ok(id)
    }

    async fn check_username_exists(&self, username: &Username) -> Result<(), UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .map(|_| ())
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn login(&self, username: &Username, password: &Password) -> Result<String, UserError> {
        let password_hash = self.authenticator.hash_password(password.expose());

        let user = self
            .repository
            .find_by_credentials(username, &password_hash)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username = %username, "Login rejected");
                UserError::InvalidCredentials
            })?;

        self.authenticator
            .issue_token(user.id.0)
            .map_err(|e| UserError::TokenIssuance(e.to_string()))
    }

    async fn verify_session(&self, token: &str) -> Result<UserId, UserError> {
        self.authenticator
            .verify_token(token)
            .map(UserId)
            .map_err(|e| UserError::Unauthorized(e.to_string()))
    }
}
