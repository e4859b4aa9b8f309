//! Repository Module
//!
//! Persistence operations over SurrealDB tables.

pub mod complaint;

pub use complaint::ComplaintRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

/// Build a record id for a table
pub fn record_id(table: &str, key: &str) -> RecordId {
    RecordId::from_table_key(table, key)
}

/// Extract the bare key when an id carries its table prefix
/// (e.g. "complaint:xxx" -> "xxx")
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}
