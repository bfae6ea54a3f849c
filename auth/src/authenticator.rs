use chrono::Duration;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordHasher;

/// Authentication coordinator combining credential hashing and session tokens.
///
/// Built once from configuration; holds the password salt and the token
/// signing key, neither of which is ever compiled into the binary.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_salt` - Application-wide salt for credential hashing
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of issued session tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(password_salt: &[u8], jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(password_salt),
            jwt_handler: JwtHandler::new(jwt_secret, token_ttl),
        }
    }

    /// Hash a password for storage or credential lookup.
    pub fn hash_password(&self, password: &str) -> String {
        self.password_hasher.hash(password)
    }

    /// Issue a session token for an authenticated user.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, user_id: i64) -> Result<String, JwtError> {
        self.jwt_handler.issue(user_id)
    }

    /// Validate a session token and return the user identifier it carries.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn verify_token(&self, token: &str) -> Result<i64, JwtError> {
        self.jwt_handler.verify(token)
    }
}
