pub mod address;
pub mod user;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by the storage layer.
///
/// Lookups report absence with `Option`, not an error; `UserNotFound` is
/// reserved for writes that target a missing row.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user {0} not found")]
    UserNotFound(i32),

    #[error("unique constraint violated: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl StoreError {
    /// Classifies a driver error, pulling unique-constraint violations out
    /// into their own variant so callers can tell them apart.
    pub(crate) fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
            return Self::Duplicate(msg);
        }
        Self::Db(err)
    }
}
