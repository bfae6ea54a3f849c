use thiserror::Error;

use crate::domain::comment::models::CommentId;
use crate::domain::post::errors::PostIdError;
use crate::domain::post::models::PostId;

/// Error type for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid comment id format: {0}")]
    InvalidFormat(String),

    #[error("Comment id must be positive, got {0}")]
    NotPositive(i64),
}

/// Error type for CommentBody validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentBodyError {
    #[error("Comment body is empty")]
    Empty,
}

/// Top-level error type for all comment-related operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid comment body: {0}")]
    InvalidBody(#[from] CommentBodyError),

    /// Also returned when the comment exists under a different post.
    #[error("Comment {comment_id} not found on post {post_id}")]
    NotFound {
        post_id: PostId,
        comment_id: CommentId,
    },

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
