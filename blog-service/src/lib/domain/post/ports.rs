use async_trait::async_trait;

use super::models::NewPost;
use super::models::Post;
use super::models::PostId;
use crate::domain::post::errors::PostError;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post owned by the authenticated user.
    ///
    /// # Arguments
    /// * `owner` - Authenticated user creating the post
    /// * `post` - Validated title and anons
    ///
    /// # Returns
    /// Identifier of the created post
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, owner: UserId, post: NewPost) -> Result<PostId, PostError>;

    /// List every post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    /// Retrieve a post by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: PostId) -> Result<Post, PostError>;

    /// List posts owned by a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts_by_owner(&self, owner: UserId) -> Result<Vec<Post>, PostError>;

    /// Replace title and anons of a post owned by `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No post with this id belongs to `owner`
    /// * `DatabaseError` - Database operation failed
    async fn update_post(&self, id: PostId, owner: UserId, post: NewPost)
        -> Result<(), PostError>;

    /// Delete a post owned by `owner` together with its comments.
    ///
    /// # Errors
    /// * `NotFound` - No post with this id belongs to `owner`
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: PostId, owner: UserId) -> Result<(), PostError>;
}

/// Repository port for post persistence operations.
///
/// Mutations take the owner and must apply the ownership condition in the
/// same atomic unit as the write.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, owner: UserId, post: NewPost) -> Result<PostId, PostError>;

    /// Retrieve all posts.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Retrieve post by identifier.
    ///
    /// # Returns
    /// Optional post entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve posts owned by a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Post>, PostError>;

    /// Update a post if and only if it belongs to `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No post with this id belongs to `owner`
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: PostId, owner: UserId, post: NewPost) -> Result<(), PostError>;

    /// Delete a post and its comments if and only if it belongs to `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No post with this id belongs to `owner`
    /// * `DatabaseError` - Database operation failed; nothing is deleted
    async fn delete(&self, id: PostId, owner: UserId) -> Result<(), PostError>;
}
