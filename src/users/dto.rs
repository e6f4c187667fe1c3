use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo_types::UserRow;

/// Body of add-user and update-user. Fields are not checked here; the
/// table constraints decide what is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub status: Option<String>,
}

/// Query string of `GET /api/users`.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub gender: Option<String>,
    pub status: Option<String>,
}

impl UserFilters {
    /// Builds filters from raw query pairs. A repeated key keeps its first
    /// value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut filters = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "gender" => &mut filters.gender,
                "status" => &mut filters.status,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        filters
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub gender: Option<String>,
    pub status: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl From<UserRow> for UserResponse {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            gender: r.gender,
            status: r.status,
            timestamp: r.created_at,
        }
    }
}
