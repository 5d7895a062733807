//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.
//!
//! ID convention: the API uses "table:id" strings end to end; repository
//! methods accept either the full form or the bare key and strip the
//! table prefix before querying.

pub mod booking;
pub mod experience;
pub mod promo_code;

// Re-exports
pub use booking::{BookingCreate, BookingRepository};
pub use experience::ExperienceRepository;
pub use promo_code::PromoCodeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Strip a leading "table:" prefix from an id, if present
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Build a record pointer from a table name and a (possibly prefixed) id
pub fn make_record(table: &str, id: &str) -> Thing {
    Thing::from((table.to_string(), strip_table_prefix(table, id).to_string()))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_table_prefix_handles_both_forms() {
        assert_eq!(strip_table_prefix("experience", "experience:abc"), "abc");
        assert_eq!(strip_table_prefix("experience", "abc"), "abc");
        // Foreign prefixes pass through untouched
        assert_eq!(
            strip_table_prefix("experience", "booking:abc"),
            "booking:abc"
        );
    }
}
