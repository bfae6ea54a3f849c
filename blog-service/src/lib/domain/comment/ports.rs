use async_trait::async_trait;

use super::errors::CommentError;
use super::models::Comment;
use super::models::CommentBody;
use super::models::CommentId;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Add a comment to an existing post.
    ///
    /// # Arguments
    /// * `post_id` - Parent post, taken from the request path
    /// * `author` - Authenticated user writing the comment
    /// * `body` - Validated comment body
    ///
    /// # Returns
    /// Identifier of the created comment
    ///
    /// # Errors
    /// * `PostNotFound` - Parent post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(
        &self,
        post_id: PostId,
        author: UserId,
        body: CommentBody,
    ) -> Result<CommentId, CommentError>;

    /// List all comments of a post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError>;

    /// Replace the body of a comment under `post_id`.
    ///
    /// # Errors
    /// * `NotFound` - No comment with this id under `post_id`
    /// * `DatabaseError` - Database operation failed
    async fn update_comment(
        &self,
        post_id: PostId,
        id: CommentId,
        body: CommentBody,
    ) -> Result<(), CommentError>;

    /// Delete a comment under `post_id`.
    ///
    /// # Errors
    /// * `NotFound` - No comment with this id under `post_id`
    /// * `DatabaseError` - Database operation failed
    async fn delete_comment(&self, post_id: PostId, id: CommentId) -> Result<(), CommentError>;
}

/// Repository port for comment persistence operations.
///
/// Mutations are scoped by the parent post in the same statement as the write.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist a new comment.
    ///
    /// # Errors
    /// * `PostNotFound` - Parent post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(
        &self,
        post_id: PostId,
        author: UserId,
        body: CommentBody,
    ) -> Result<CommentId, CommentError>;

    /// Retrieve comments of a post, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError>;

    /// Update a comment if and only if it belongs to `post_id`.
    ///
    /// # Errors
    /// * `NotFound` - No comment with this id under `post_id`
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        post_id: PostId,
        id: CommentId,
        body: CommentBody,
    ) -> Result<(), CommentError>;

    /// Delete a comment if and only if it belongs to `post_id`.
    ///
    /// # Errors
    /// * `NotFound` - No comment with this id under `post_id`
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, post_id: PostId, id: CommentId) -> Result<(), CommentError>;
}
