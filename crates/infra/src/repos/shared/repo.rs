use thiserror::Error;

/// Failure reported by a repository. The message carries the diagnostic
/// produced by the backing store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Stored record with id: {id} is corrupt. Error message: {reason}")]
    CorruptRecord { id: String, reason: String },
}
