use std::fmt;

use crate::user::errors::DisplayNameError;
use crate::user::errors::PasswordError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered user. `password_hash` is the stored credential,
/// never the plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub username: Username,
    pub password_hash: String,
}

/// User unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - Decimal identifier
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Identifier is zero or negative
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))?;

        if id <= 0 {
            return Err(UserIdError::NotPositive(id));
        }

        Ok(UserId(id))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Non-empty, at most 64 characters, no whitespace. Usernames may be email
/// addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty
    /// * `TooLong` - Username longer than 64 characters
    /// * `ContainsWhitespace` - Username contains whitespace
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length == 0 {
            return Err(UsernameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if username.chars().any(char::is_whitespace) {
            return Err(UsernameError::ContainsWhitespace);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 100;

    /// Create a new display name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, DisplayNameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DisplayNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DisplayNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password as received from the client.
///
/// Only exists between the inbound boundary and the hasher; Debug output is
/// redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Create a new password for registration.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(password))
    }

    /// Wrap a password presented at login without applying registration
    /// rules, so that policy changes never lock out existing users.
    pub fn for_login(password: String) -> Self {
        Self(password)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: DisplayName,
    pub username: Username,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `username` - Validated username
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(name: DisplayName, username: Username, password: Password) -> Self {
        Self {
            name,
            username,
            password,
        }
    }
}

/// User row to persist; the credential is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: DisplayName,
    pub username: Username,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_string() {
        assert_eq!(UserId::from_string("42"), Ok(UserId(42)));
        assert!(matches!(
            UserId::from_string("abc"),
            Err(UserIdError::InvalidFormat(_))
        ));
        assert_eq!(UserId::from_string("0"), Err(UserIdError::NotPositive(0)));
        assert_eq!(
            UserId::from_string("-3"),
            Err(UserIdError::NotPositive(-3))
        );
    }

    #[test]
    fn test_username_validation() {
        assert!(Username::new("tester".to_string()).is_ok());
        assert!(Username::new("someone@example.com".to_string()).is_ok());
        assert_eq!(Username::new(String::new()), Err(UsernameError::Empty));
        assert_eq!(
            Username::new("two words".to_string()),
            Err(UsernameError::ContainsWhitespace)
        );
        assert_eq!(
            Username::new("a".repeat(65)),
            Err(UsernameError::TooLong {
                max: 64,
                actual: 65
            })
        );
    }

    #[test]
    fn test_display_name_is_trimmed() {
        let name = DisplayName::new("  Alice  ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(
            DisplayName::new("   ".to_string()),
            Err(DisplayNameError::Empty)
        );
    }

    #[test]
    fn test_password_min_length() {
        assert!(Password::new("123456".to_string()).is_ok());
        assert_eq!(
            Password::new("12345".to_string()),
            Err(PasswordError::TooShort { min: 6 })
        );
        // Login never applies the registration policy
        assert_eq!(Password::for_login("x".to_string()).expose(), "x");
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("correct-pw".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("correct-pw"));
    }
}
