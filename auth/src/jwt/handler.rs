use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::claims::SessionClaims;
use super::errors::JwtError;

/// Session lifetime used when configuration does not override it.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 48;

/// JWT token handler for issuing and verifying session tokens.
///
/// Signs with HS256 (HMAC with SHA-256). Verification accepts any algorithm
/// of the HMAC family and rejects everything else.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `token_ttl` - Lifetime of issued session tokens
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            token_ttl,
        }
    }

    /// Issue a session token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated user identifier
    ///
    /// # Returns
    /// Signed token expiring after the configured TTL
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, user_id: i64) -> Result<String, JwtError> {
        self.encode(&SessionClaims::for_user(user_id, self.token_ttl))
    }

    /// Verify a session token and extract the user identifier.
    ///
    /// # Arguments
    /// * `token` - Token string presented by the client
    ///
    /// # Returns
    /// User identifier embedded in the token
    ///
    /// # Errors
    /// * `TokenExpired` - Expiration timestamp is in the past
    /// * `InvalidToken` - Signature or algorithm is not acceptable
    /// * `DecodingFailed` - Token is malformed or payload has the wrong shape
    pub fn verify(&self, token: &str) -> Result<i64, JwtError> {
        self.decode::<SessionClaims>(token)
            .map(|claims| claims.user_id)
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Requires an `exp` claim and applies no clock leeway.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `InvalidToken` - Token signature or algorithm is invalid
    /// * `DecodingFailed` - Token is malformed
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::MissingAlgorithm => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn handler() -> JwtHandler {
        JwtHandler::new(SECRET, Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
    }

    #[test]
    fn test_issue_and_verify() {
        let handler = handler();

        let token = handler.issue(42).expect("Failed to issue token");
        assert!(!token.is_empty());

        let user_id = handler.verify(&token).expect("Failed to verify token");
        assert_eq!(user_id, 42);
    }

    #[test]
    fn test_issued_token_carries_ttl() {
        let handler = handler();

        let token = handler.issue(1).expect("Failed to issue token");
        let claims: SessionClaims = handler.decode(&token).expect("Failed to decode token");

        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_TTL_HOURS * 60 * 60);
    }

    #[test]
    fn test_verify_expired_token() {
        let handler = handler();
        let now = Utc::now().timestamp();

        let claims = SessionClaims {
            user_id: 42,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = handler.encode(&claims).expect("Failed to encode token");

        assert_eq!(handler.verify(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_verify_invalid_token() {
        let handler = handler();

        let result = handler.verify("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!", Duration::hours(1));
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!", Duration::hours(1));

        let token = handler1.issue(42).expect("Failed to issue token");

        let result = handler2.verify(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_accepts_other_hmac_algorithms() {
        let handler = handler();
        let claims = SessionClaims::for_user(5, Duration::hours(1));

        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        assert_eq!(handler.verify(&token), Ok(5));
    }

    #[test]
    fn test_verify_rejects_unexpected_payload() {
        #[derive(Serialize)]
        struct OtherClaims {
            sub: String,
            exp: i64,
        }

        let handler = handler();
        let token = handler
            .encode(&OtherClaims {
                sub: "user123".to_string(),
                exp: Utc::now().timestamp() + 3600,
            })
            .expect("Failed to encode token");

        let result = handler.verify(&token);
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_verify_rejects_missing_expiration() {
        #[derive(Serialize)]
        struct NoExpiry {
            user_id: i64,
        }

        let handler = handler();
        let token = handler
            .encode(&NoExpiry { user_id: 42 })
            .expect("Failed to encode token");

        assert!(handler.verify(&token).is_err());
    }
}
