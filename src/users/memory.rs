//! In-memory `UserStore` for handler tests. Enforces the same constraints
//! as the `user_info` table so error paths behave like the real thing.

use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::{
    dto::{UserFilters, UserPayload},
    repo::UserStore,
    repo_types::UserRow,
};

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<UserRow>>,
}

impl MemoryUserStore {
    pub fn snapshot(&self) -> Vec<UserRow> {
        self.rows.lock().unwrap().clone()
    }
}

fn check_domain(column: &str, value: &Option<String>, allowed: &[&str]) -> anyhow::Result<()> {
    match value.as_deref() {
        Some(v) if !allowed.contains(&v) => anyhow::bail!(
            "new row for relation \"user_info\" violates check constraint \"user_info_{column}_check\""
        ),
        _ => Ok(()),
    }
}

fn required(column: &str, value: &Option<String>) -> anyhow::Result<String> {
    value.clone().ok_or_else(|| {
        anyhow::anyhow!("null value in column \"{column}\" of relation \"user_info\" violates not-null constraint")
    })
}

fn check_row(user: &UserPayload) -> anyhow::Result<(String, String)> {
    let name = required("name", &user.name)?;
    let email = required("email", &user.email)?;
    check_domain("gender", &user.gender, &["MALE", "FEMALE"])?;
    check_domain("status", &user.status, &["ACTIVE", "INACTIVE"])?;
    Ok((name, email))
}

fn email_taken(rows: &[UserRow], email: &str, except: Option<Uuid>) -> anyhow::Result<()> {
    if rows.iter().any(|r| r.email == email && Some(r.id) != except) {
        anyhow::bail!("duplicate key value violates unique constraint \"user_info_email_key\"");
    }
    Ok(())
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, id: Uuid, user: &UserPayload) -> anyhow::Result<()> {
        let (name, email) = check_row(user)?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.id == id) {
            anyhow::bail!("duplicate key value violates unique constraint \"user_info_pkey\"");
        }
        email_taken(&rows, &email, None)?;
        rows.push(UserRow {
            id,
            name,
            email,
            gender: user.gender.clone(),
            status: user.status.clone(),
            created_at: OffsetDateTime::now_utc(),
        });
        Ok(())
    }

    async fn list(&self, filters: &UserFilters) -> anyhow::Result<Vec<UserRow>> {
        let predicates = filters.predicates();
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| {
                predicates.iter().all(|p| {
                    let field = match p.column {
                        "gender" => row.gender.as_deref(),
                        "status" => row.status.as_deref(),
                        _ => None,
                    };
                    field == Some(p.value)
                })
            })
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, user: &UserPayload) -> anyhow::Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        let Some(idx) = rows.iter().position(|r| r.id == id) else {
            return Ok(0);
        };
        let (name, email) = check_row(user)?;
        email_taken(&rows, &email, Some(id))?;
        let row = &mut rows[idx];
        row.name = name;
        row.email = email;
        row.gender = user.gender.clone();
        row.status = user.status.clone();
        Ok(1)
    }
}
