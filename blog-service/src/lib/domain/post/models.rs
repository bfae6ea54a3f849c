use std::fmt;

use crate::domain::post::errors::PostAnonsError;
use crate::domain::post::errors::PostIdError;
use crate::domain::post::errors::PostTitleError;
use crate::domain::user::models::UserId;

/// Post aggregate entity.
///
/// Every post has exactly one owner, set from the authenticated identity at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: PostTitle,
    pub anons: PostAnons,
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    /// Parse a post ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    /// * `NotPositive` - Identifier is zero or negative
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))?;

        if id <= 0 {
            return Err(PostIdError::NotPositive(id));
        }

        Ok(PostId(id))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title value type
///
/// Trimmed, non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    const MAX_LENGTH: usize = 255;

    pub fn new(title: String) -> Result<Self, PostTitleError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(PostTitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(PostTitleError::TooLong {
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

/// Post body ("anons") value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAnons(String);

impl PostAnons {
    pub fn new(anons: String) -> Result<Self, PostAnonsError> {
        if anons.trim().is_empty() {
            return Err(PostAnonsError::Empty);
        }
        Ok(Self(anons))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post content for creation and full replacement.
///
/// Carries no owner: ownership always comes from the caller's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: PostTitle,
    pub anons: PostAnons,
}

impl NewPost {
    pub fn new(title: PostTitle, anons: PostAnons) -> Self {
        Self { title, anons }
    }
}
