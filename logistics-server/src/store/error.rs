//! Store error types.

/// Errors from the persistent store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A UNIQUE constraint rejected the write
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Any other database failure (connection, SQL, decoding)
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Schema migration failed at startup
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::UniqueViolation(db.message().to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

impl StoreError {
    /// Whether this error is a uniqueness conflict.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation(_))
    }
}
