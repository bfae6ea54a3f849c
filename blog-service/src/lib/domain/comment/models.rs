use std::fmt;

use crate::domain::comment::errors::CommentBodyError;
use crate::domain::comment::errors::CommentIdError;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Comment entity.
///
/// Belongs to exactly one post and one authoring user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub body: CommentBody,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    /// Parse a comment ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Identifier is zero or negative
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))?;

        if id <= 0 {
            return Err(CommentIdError::NotPositive(id));
        }

        Ok(CommentId(id))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment body value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(body: String) -> Result<Self, CommentBodyError> {
        if body.trim().is_empty() {
            return Err(CommentBodyError::Empty);
        }
        Ok(Self(body))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_from_string() {
        assert_eq!(CommentId::from_string("5"), Ok(CommentId(5)));
        assert_eq!(
            CommentId::from_string("-1"),
            Err(CommentIdError::NotPositive(-1))
        );
        assert!(CommentId::from_string("").is_err());
    }

    #[test]
    fn test_body_validation() {
        assert_eq!(
            CommentBody::new("Nice post".to_string()).unwrap().as_str(),
            "Nice post"
        );
        assert_eq!(
            CommentBody::new("  ".to_string()),
            Err(CommentBodyError::Empty)
        );
    }
}
