//! Authentication utilities library
//!
//! Provides the credential and session primitives of the blog service:
//! - Deterministic salted password hashing (SHA-256)
//! - Session token issuance and verification (HS256 JWT)
//! - Authentication coordination
//!
//! Secrets are always passed in by the caller; nothing here reads
//! configuration or carries compiled-in keys.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(b"application_salt");
//! let hash = hasher.hash("my_password");
//! assert_eq!(hash, hasher.hash("my_password"));
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(48));
//! let token = handler.issue(42).unwrap();
//! assert_eq!(handler.verify(&token).unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     b"application_salt",
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::hours(48),
//! );
//!
//! // Register: hash password
//! let stored = auth.hash_password("password123");
//!
//! // Login: the same plaintext hashes to the stored credential
//! assert_eq!(auth.hash_password("password123"), stored);
//! let token = auth.issue_token(7).unwrap();
//!
//! // Validate token
//! assert_eq!(auth.verify_token(&token).unwrap(), 7);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use jwt::DEFAULT_TOKEN_TTL_HOURS;
pub use password::PasswordHasher;
