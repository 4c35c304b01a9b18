//! Blob Store Abstraction
//!
//! The seam between the sync loop and the remote object-storage provider.
//! The job only needs two operations: resolve a blob by name (lazy, never
//! fails synchronously) and persist a flat string-to-string metadata map
//! under a single namespaced container.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Container key every payload is written under, distinct from system
/// metadata the store manages itself (content-type, size, etc.).
pub const CUSTOM_METADATA_KEY: &str = "customMetadata";

/// A named remote blob. Resolution is lazy: constructing a handle performs
/// no remote call, so a handle may name a blob that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobHandle {
    name: String,
}

impl BlobHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for BlobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Remote object-storage seam.
///
/// # Example
///
/// ```ignore
/// use core_sync::{BlobStore, CUSTOM_METADATA_KEY};
///
/// let blob = store.resolve("img1.jpg");
/// store.set_metadata(&blob, CUSTOM_METADATA_KEY, &payload).await?;
/// ```
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Resolve a blob by name. Never fails synchronously.
    fn resolve(&self, name: &str) -> BlobHandle;

    /// Apply and persist custom metadata for the blob, replacing whatever
    /// the container currently holds. All values are already coerced to
    /// strings because the remote metadata API only accepts string fields.
    async fn set_metadata(
        &self,
        blob: &BlobHandle,
        container_key: &str,
        payload: &BTreeMap<String, String>,
    ) -> Result<()>;
}
