use std::sync::Arc;

use async_trait::async_trait;

use super::errors::PostError;
use super::models::NewPost;
use super::models::Post;
use super::models::PostId;
use super::ports::PostRepository;
use super::ports::PostServicePort;
use crate::domain::user::models::UserId;

/// Domain service for post operations.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(&self, owner: UserId, post: NewPost) -> Result<PostId, PostError> {
        let id = self.repository.create(owner, post).await?;

        tracing::info!(post_id = %id, user_id = %owner, "Post created");

        Ok(id)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_all().await
    }

    async fn get_post(&self, id: PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id))
    }

    async fn list_posts_by_owner(&self, owner: UserId) -> Result<Vec<Post>, PostError> {
        self.repository.find_by_owner(owner).await
    }

    async fn update_post(
        &self,
        id: PostId,
        owner: UserId,
        post: NewPost,
    ) -> Result<(), PostError> {
        self.repository
            .update(id, owner, post)
            .await
            .inspect_err(|e| {
                if matches!(e, PostError::NotFound(_)) {
                    tracing::warn!(post_id = %id, user_id = %owner, "Post update outside ownership scope");
                }
            })
    }

    async fn delete_post(&self, id: PostId, owner: UserId) -> Result<(), PostError> {
        self.repository.delete(id, owner).await.inspect_err(|e| {
            if matches!(e, PostError::NotFound(_)) {
                tracing::warn!(post_id = %id, user_id = %owner, "Post delete outside ownership scope");
            }
        })?;

        tracing::info!(post_id = %id, user_id = %owner, "Post deleted");

        Ok(())
    }
}
