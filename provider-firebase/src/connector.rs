//! Firebase Storage connector implementation
//!
//! Implements the `BlobStore` seam over the Firebase Storage object API.

use crate::error::{FirebaseStorageError, Result};
use crate::transport::{HttpMethod, HttpRequest, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use core_sync::{BlobHandle, BlobStore};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Firebase Storage object API base URL
const STORAGE_API_BASE: &str = "https://firebasestorage.googleapis.com/v0";

/// Firebase Storage connector
///
/// One `PATCH` per metadata update, single attempt, bearer-token auth.
/// Blob resolution is lazy: the remote side is first touched by
/// `set_metadata`, never by `resolve`.
pub struct FirebaseStorageConnector {
    transport: Arc<dyn HttpTransport>,
    bucket: String,
    access_token: String,
}

impl FirebaseStorageConnector {
    /// Create a connector bound to one bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket name is empty. This is the fatal
    /// initialization failure that aborts the job before any row runs.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        bucket: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        let bucket = bucket.into();
        if bucket.is_empty() {
            return Err(FirebaseStorageError::InvalidBucket(
                "bucket name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            transport,
            bucket,
            access_token: access_token.into(),
        })
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Object URL with the full name percent-encoded, slashes included.
    fn object_url(&self, name: &str) -> String {
        format!(
            "{}/b/{}/o/{}",
            STORAGE_API_BASE,
            self.bucket,
            urlencoding::encode(name)
        )
    }

    fn encode_body(container_key: &str, payload: &BTreeMap<String, String>) -> Result<Bytes> {
        let mut container = serde_json::Map::new();
        container.insert(
            container_key.to_string(),
            serde_json::to_value(payload)
                .map_err(|e| FirebaseStorageError::EncodeError(e.to_string()))?,
        );

        let body = serde_json::to_vec(&serde_json::Value::Object(container))
            .map_err(|e| FirebaseStorageError::EncodeError(e.to_string()))?;
        Ok(Bytes::from(body))
    }
}

#[async_trait]
impl BlobStore for FirebaseStorageConnector {
    fn resolve(&self, name: &str) -> BlobHandle {
        BlobHandle::new(name)
    }

    #[instrument(skip(self, payload), fields(blob = %blob.name()))]
    async fn set_metadata(
        &self,
        blob: &BlobHandle,
        container_key: &str,
        payload: &BTreeMap<String, String>,
    ) -> core_sync::Result<()> {
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), self.auth_header());
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let request = HttpRequest {
            method: HttpMethod::Patch,
            url: self.object_url(blob.name()),
            headers,
            body: Some(Self::encode_body(container_key, payload)?),
        };

        let response = self.transport.execute(request).await?;

        if response.is_success() {
            debug!(status = response.status, "Metadata patch applied");
            Ok(())
        } else {
            warn!(status = response.status, "Metadata patch rejected");
            Err(FirebaseStorageError::ApiError {
                status_code: response.status,
                message: String::from_utf8_lossy(&response.body).to_string(),
            }
            .into())
        }
    }
}
