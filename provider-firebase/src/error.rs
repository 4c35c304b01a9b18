//! Error types for the Firebase Storage provider

use core_sync::StoreError;
use thiserror::Error;

/// Firebase Storage provider errors
#[derive(Error, Debug)]
pub enum FirebaseStorageError {
    /// Connector configuration was rejected at initialization
    #[error("Invalid bucket name: {0}")]
    InvalidBucket(String),

    /// API request returned an error status
    #[error("Firebase Storage API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Request never produced a response
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Failed to build the request payload
    #[error("Failed to encode request body: {0}")]
    EncodeError(String),
}

/// Result type for Firebase Storage operations
pub type Result<T> = std::result::Result<T, FirebaseStorageError>;

impl From<FirebaseStorageError> for StoreError {
    fn from(error: FirebaseStorageError) -> Self {
        match error {
            FirebaseStorageError::ApiError {
                status_code,
                message,
            } => StoreError::Api {
                status_code,
                message,
            },
            FirebaseStorageError::NetworkError(msg) => StoreError::Network(msg),
            FirebaseStorageError::InvalidBucket(msg) => {
                StoreError::OperationFailed(format!("Invalid bucket name: {}", msg))
            }
            FirebaseStorageError::EncodeError(msg) => {
                StoreError::OperationFailed(format!("Failed to encode request body: {}", msg))
            }
        }
    }
}
