use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Row of the `user_info` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub gender: Option<String>,
    pub status: Option<String>,
    #[sqlx(rename = "timestamp")]
    pub created_at: OffsetDateTime, // set by the column default, never updated
}
