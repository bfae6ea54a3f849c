use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, UserError> {
        Ok(User {
            id: UserId(row.get("id")),
            name: DisplayName::new(row.get("name"))?,
            username: Username::new(row.get("username"))?,
            password_hash: row.get("password_hash"),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserId, UserError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(UserId(row.get("id")))
    }

    async fn find_by_credentials(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, username, password_hash
            FROM users
            WHERE username = $1 AND password_hash = $2
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }
}
