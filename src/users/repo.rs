use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::users::{
    dto::{UserFilters, UserPayload},
    filters::select_users,
    repo_types::UserRow,
};

/// Persistence for `user_info`. One statement per call.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, id: Uuid, user: &UserPayload) -> anyhow::Result<()>;
    async fn list(&self, filters: &UserFilters) -> anyhow::Result<Vec<UserRow>>;
    /// Returns the number of rows touched.
    async fn update(&self, id: Uuid, user: &UserPayload) -> anyhow::Result<u64>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, id: Uuid, user: &UserPayload) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_info (id, name, email, gender, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(user.name.as_deref())
        .bind(user.email.as_deref())
        .bind(user.gender.as_deref())
        .bind(user.status.as_deref())
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn list(&self, filters: &UserFilters) -> anyhow::Result<Vec<UserRow>> {
        let predicates = filters.predicates();
        let mut qb = select_users(&predicates);
        debug!(sql = qb.sql(), "list users");
        let rows = qb.build_query_as::<UserRow>().fetch_all(&self.db).await?;
        Ok(rows)
    }

    async fn update(&self, id: Uuid, user: &UserPayload) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE user_info
               SET name = $1, email = $2, gender = $3, status = $4
             WHERE id = $5
            "#,
        )
        .bind(user.name.as_deref())
        .bind(user.email.as_deref())
        .bind(user.gender.as_deref())
        .bind(user.status.as_deref())
        .bind(id)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected())
    }
}
