/// Storage-specific errors
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Insert conflicted with an existing primary key
    #[error("user already exists: {id}")]
    DuplicateId {
        /// The id that already exists
        id: String,
    },

    /// A schema constraint other than the primary key was violated
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Classify an insert failure for the given user id
    ///
    /// SQLite reports a duplicate primary key as a unique violation; other
    /// constraint failures keep the driver message so callers can describe
    /// the conflict without exposing the raw error.
    pub(crate) fn from_insert(err: sqlx::Error, id: &str) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            match db.kind() {
                ErrorKind::UniqueViolation => {
                    return Self::DuplicateId { id: id.to_owned() };
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return Self::ConstraintViolation(db.message().to_owned());
                }
                _ => {}
            }
        }
        Self::Database(err)
    }
}
