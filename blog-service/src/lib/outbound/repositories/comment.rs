use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentBody;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: PgRow) -> Result<Comment, CommentError> {
        Ok(Comment {
            id: CommentId(row.get("id")),
            post_id: PostId(row.get("post_id")),
            user_id: UserId(row.get("user_id")),
            body: CommentBody::new(row.get("body"))?,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(
        &self,
        post_id: PostId,
        author: UserId,
        body: CommentBody,
    ) -> Result<CommentId, CommentError> {
        let row = sqlx::query(
            r#"
            INSERT INTO comments (post_id, user_id, body)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(post_id.0)
        .bind(author.0)
        .bind(body.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some("comments_post_id_fkey")
                {
                    return CommentError::PostNotFound(post_id);
                }
            }
            CommentError::DatabaseError(e.to_string())
        })?;

        Ok(CommentId(row.get("id")))
    }

    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, post_id, user_id, body
            FROM comments
            WHERE post_id = $1
            ORDER BY id
            "#,
        )
        .bind(post_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_comment).collect()
    }

    async fn update(
        &self,
        post_id: PostId,
        id: CommentId,
        body: CommentBody,
    ) -> Result<(), CommentError> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET body = $3
            WHERE id = $1 AND post_id = $2
            "#,
        )
        .bind(id.0)
        .bind(post_id.0)
        .bind(body.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound {
                post_id,
                comment_id: id,
            });
        }

        Ok(())
    }

    async fn delete(&self, post_id: PostId, id: CommentId) -> Result<(), CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1 AND post_id = $2
            "#,
        )
        .bind(id.0)
        .bind(post_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound {
                post_id,
                comment_id: id,
            });
        }

        Ok(())
    }
}
