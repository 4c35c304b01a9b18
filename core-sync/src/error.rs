use thiserror::Error;

/// Error returned by a [`BlobStore`](crate::store::BlobStore) update.
///
/// Deliberately coarse: the sync treats every remote failure the same way,
/// as a single skipped row. There is no retryable/permanent distinction.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Remote API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
