use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostAnons;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: PgRow) -> Result<Post, PostError> {
        Ok(Post {
            id: PostId(row.get("id")),
            user_id: UserId(row.get("user_id")),
            title: PostTitle::new(row.get("title"))?,
            anons: PostAnons::new(row.get("anons"))?,
        })
    }
}

fn database_error(e: sqlx::Error) -> PostError {
    PostError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, owner: UserId, post: NewPost) -> Result<PostId, PostError> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (user_id, title, anons)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(owner.0)
        .bind(post.title.as_str())
        .bind(post.anons.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(PostId(row.get("id")))
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, anons
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Self::row_to_post).collect()
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, anons
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Self::row_to_post).transpose()
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, anons
            FROM posts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Self::row_to_post).collect()
    }

    async fn update(&self, id: PostId, owner: UserId, post: NewPost) -> Result<(), PostError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $3, anons = $4
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .bind(post.title.as_str())
        .bind(post.anons.as_str())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id));
        }

        Ok(())
    }

    async fn delete(&self, id: PostId, owner: UserId) -> Result<(), PostError> {
        // Rolled back on drop if any step below fails.
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let locked = sqlx::query(
            r#"
            SELECT id
            FROM posts
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?;

        if locked.is_none() {
            return Err(PostError::NotFound(id));
        }

        let comments = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        tracing::debug!(
            post_id = %id,
            comments_deleted = comments.rows_affected(),
            "Post removed with its comments"
        );

        Ok(())
    }
}
