//! # Metadata Sync Module
//!
//! Joins the loaded datasets and pushes descriptive metadata onto remote
//! storage blobs, one row at a time.
//!
//! ## Overview
//!
//! This module manages the sync run itself:
//! - The `BlobStore` seam the remote storage provider implements
//! - The `MetadataSyncJob` per-row join-and-update loop
//! - The per-row outcome taxonomy and the final report
//!
//! Execution is strictly sequential: each remote update completes before
//! the next row is considered. Row-level failures are isolated and counted;
//! the run itself never fails once the inputs are loaded.

pub mod error;
pub mod job;
pub mod store;

pub use error::{Result, StoreError};
pub use job::{MetadataSyncJob, RowOutcome, SkipReason, SyncReport};
pub use store::{BlobHandle, BlobStore, CUSTOM_METADATA_KEY};
