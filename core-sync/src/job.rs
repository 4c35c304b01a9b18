//! Metadata Sync Job
//!
//! The per-row join-and-update loop. Rows are processed strictly in input
//! order; each remote update blocks until it completes before the next row
//! is considered. The only state that mutates during a run is the pair of
//! outcome counters in the report.
//!
//! Per row:
//! 1. An empty `imgur_url` or `firebase_filename` skips the row as invalid.
//! 2. Both indexes are probed with `imgur_url` (the join key); either miss
//!    skips the row.
//! 3. The payload carries `description` plus `sphere_x`/`sphere_y`/
//!    `sphere_z` stringified in `(x, y, z)` order.
//! 4. One `set_metadata` call per fully-resolved row. Any remote failure
//!    counts as a skip and is never retried or escalated; the loop always
//!    proceeds to the next row.

use crate::store::{BlobStore, CUSTOM_METADATA_KEY};
use core_dataset::{DescriptionIndex, MappingRow, SphereIndex};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Why a row was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A required row field was missing or empty.
    InvalidRow,
    /// The join key resolved in neither or only one of the two indexes.
    NoDataFound,
    /// The remote update call failed.
    UpdateFailed,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InvalidRow => "invalid row",
            SkipReason::NoDataFound => "no data found",
            SkipReason::UpdateFailed => "update failed",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single mapping row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Updated,
    Skipped(SkipReason),
}

/// Final counts for a completed run.
///
/// `updated + skipped` always equals the number of rows processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub updated: u64,
    pub skipped: u64,
}

impl SyncReport {
    pub fn total(&self) -> u64 {
        self.updated + self.skipped
    }

    fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Updated => self.updated += 1,
            RowOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

/// The join-and-update pipeline.
///
/// Holds the two immutable indexes and the injected store. The job itself
/// is infallible once constructed: row failures are counted, not raised.
pub struct MetadataSyncJob {
    descriptions: DescriptionIndex,
    spheres: SphereIndex,
    store: Arc<dyn BlobStore>,
}

impl MetadataSyncJob {
    pub fn new(
        descriptions: DescriptionIndex,
        spheres: SphereIndex,
        store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            descriptions,
            spheres,
            store,
        }
    }

    /// Process the mapping rows in order and return the final counts.
    pub async fn run(&self, rows: &[MappingRow]) -> SyncReport {
        info!(rows = rows.len(), "Starting metadata update");

        let mut report = SyncReport::default();
        for row in rows {
            report.record(self.process_row(row).await);
        }

        info!(
            updated = report.updated,
            skipped = report.skipped,
            "Metadata update complete"
        );
        report
    }

    async fn process_row(&self, row: &MappingRow) -> RowOutcome {
        if row.imgur_url.is_empty() || row.firebase_filename.is_empty() {
            warn!(?row, reason = %SkipReason::InvalidRow, "Skipping row");
            return RowOutcome::Skipped(SkipReason::InvalidRow);
        }

        // imgur_url is the join key for both indexes; firebase_filename is
        // only ever the blob name.
        let description = self.descriptions.get(&row.imgur_url);
        let coords = self.spheres.get(&row.imgur_url);

        let (description, coords) = match (description, coords) {
            (Some(description), Some(coords)) => (description, coords),
            _ => {
                warn!(
                    blob = %row.firebase_filename,
                    url = %row.imgur_url,
                    reason = %SkipReason::NoDataFound,
                    "Skipping row"
                );
                return RowOutcome::Skipped(SkipReason::NoDataFound);
            }
        };

        let mut payload = BTreeMap::new();
        payload.insert("description".to_string(), description.to_string());
        payload.insert("sphere_x".to_string(), coords[0].to_string());
        payload.insert("sphere_y".to_string(), coords[1].to_string());
        payload.insert("sphere_z".to_string(), coords[2].to_string());

        let blob = self.store.resolve(&row.firebase_filename);
        match self
            .store
            .set_metadata(&blob, CUSTOM_METADATA_KEY, &payload)
            .await
        {
            Ok(()) => {
                info!(blob = %blob, "Updated metadata");
                RowOutcome::Updated
            }
            Err(e) => {
                warn!(blob = %blob, error = %e, reason = %SkipReason::UpdateFailed, "Skipping row");
                RowOutcome::Skipped(SkipReason::UpdateFailed)
            }
        }
    }
}
