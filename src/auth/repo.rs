use anyhow::Context;
use async_trait::async_trait;

use crate::{
    auth::repo_types::User,
    db::{is_unique_violation, PgRepo},
    error::{AppError, AppResult},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Insert a user; a taken email yields `AppError::Conflict`.
    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[async_trait]
impl UserRepo for PgRepo {
    async fn create(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let res = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, is_active, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;

        match res {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => {
                Err(AppError::Conflict("Email already registered".into()))
            }
            Err(e) => Err(AppError::Internal(anyhow::Error::new(e).context("insert user"))),
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_active, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("find user by email")?;
        Ok(user)
    }
}
