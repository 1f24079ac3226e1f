use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String, // Argon2 PHC string, never exposed
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}
