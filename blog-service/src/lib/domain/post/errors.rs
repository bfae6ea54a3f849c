use thiserror::Error;

use crate::domain::post::models::PostId;
use crate::domain::user::errors::UserIdError;

/// Error type for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid post id format: {0}")]
    InvalidFormat(String),

    #[error("Post id must be positive, got {0}")]
    NotPositive(i64),
}

/// Error type for PostTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTitleError {
    #[error("Post title is empty")]
    Empty,

    #[error("Post title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for PostAnons validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostAnonsError {
    #[error("Post anons is empty")]
    Empty,
}

/// Top-level error type for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] PostTitleError),

    #[error("Invalid anons: {0}")]
    InvalidAnons(#[from] PostAnonsError),

    /// Also returned when the post exists but belongs to another user.
    #[error("Post not found: {0}")]
    NotFound(PostId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PostError {
    fn from(err: anyhow::Error) -> Self {
        PostError::Unknown(err.to_string())
    }
}
