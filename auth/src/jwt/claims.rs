use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token payload.
///
/// Carries the authenticated user identifier together with the RFC 7519
/// issued-at and expiration timestamps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Authenticated user identifier
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for a user session starting now.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated user identifier
    /// * `ttl` - Session lifetime
    ///
    /// # Returns
    /// Claims with iat set to now and exp set to now + ttl
    pub fn for_user(user_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = SessionClaims::for_user(42, Duration::hours(48));

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp - claims.iat, 48 * 60 * 60);
    }

    #[test]
    fn test_serialized_field_names() {
        let claims = SessionClaims {
            user_id: 7,
            iat: 10,
            exp: 20,
        };

        let value = serde_json::to_value(claims).unwrap();
        assert_eq!(value["user_id"], 7);
        assert_eq!(value["iat"], 10);
        assert_eq!(value["exp"], 20);
    }
}
