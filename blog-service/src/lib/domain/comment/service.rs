use std::sync::Arc;

use async_trait::async_trait;

use super::errors::CommentError;
use super::models::Comment;
use super::models::CommentBody;
use super::models::CommentId;
use super::ports::CommentRepository;
use super::ports::CommentServicePort;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Domain service for comment operations.
pub struct CommentService<CR>
where
    CR: CommentRepository,
{
    repository: Arc<CR>,
}

impl<CR> CommentService<CR>
where
    CR: CommentRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CommentServicePort for CommentService<CR>
where
    CR: CommentRepository,
{
    async fn create_comment(
        &self,
        post_id: PostId,
        author: UserId,
        body: CommentBody,
    ) -> Result<CommentId, CommentError> {
        let id = self.repository.create(post_id, author, body).await?;

        tracing::info!(comment_id = %id, post_id = %post_id, user_id = %author, "Comment created");

        Ok(id)
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError> {
        self.repository.list_for_post(post_id).await
    }

    async fn update_comment(
        &self,
        post_id: PostId,
        id: CommentId,
        body: CommentBody,
    ) -> Result<(), CommentError> {
        self.repository.update(post_id, id, body).await
    }

    async fn delete_comment(&self, post_id: PostId, id: CommentId) -> Result<(), CommentError> {
        self.repository.delete(post_id, id).await?;

        tracing::info!(comment_id = %id, post_id = %post_id, "Comment deleted");

        Ok(())
    }
}
