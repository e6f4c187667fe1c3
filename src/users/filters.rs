use sqlx::{Postgres, QueryBuilder};

use crate::users::dto::UserFilters;

const SELECT_USERS: &str =
    "SELECT id, name, email, gender, status, timestamp FROM user_info WHERE 1=1";

/// Equality condition on one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate<'a> {
    pub column: &'static str,
    pub value: &'a str,
}

impl UserFilters {
    /// Present filters, gender before status.
    pub fn predicates(&self) -> Vec<Predicate<'_>> {
        [("gender", &self.gender), ("status", &self.status)]
            .into_iter()
            .filter_map(|(column, value)| {
                value.as_deref().map(|value| Predicate { column, value })
            })
            .collect()
    }
}

/// Folds `predicates` onto the base select. Placeholders are numbered by
/// `push_bind` in append order, so `$n` always lines up with the n-th value.
pub fn select_users<'a>(predicates: &[Predicate<'a>]) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_USERS);
    for p in predicates {
        qb.push(" AND ")
            .push(p.column)
            .push(" = ")
            .push_bind(p.value);
    }
    qb
}
