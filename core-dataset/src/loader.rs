//! Dataset loaders
//!
//! One function per input file. Loaders run during startup only; every
//! error they return aborts the job before any row is processed.

use crate::error::{DatasetError, Result};
use crate::records::{DescriptionIndex, DescriptionRecord, MappingRow, SphereCoords, SphereIndex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the description dataset and index it by `id`.
///
/// The file is a JSON array of records carrying at least `id` and
/// `description`. Duplicate ids keep the last occurrence.
pub fn load_descriptions(path: &Path) -> Result<DescriptionIndex> {
    let contents = read_file(path)?;

    let records: Vec<DescriptionRecord> =
        serde_json::from_str(&contents).map_err(|e| DatasetError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(records = records.len(), path = %path.display(), "Parsed description records");
    Ok(DescriptionIndex::from_records(records))
}

/// Load the sphere-position dataset.
///
/// The file is a JSON object mapping each key directly to a 3-element
/// numeric array.
pub fn load_spheres(path: &Path) -> Result<SphereIndex> {
    let contents = read_file(path)?;

    let entries: HashMap<String, SphereCoords> =
        serde_json::from_str(&contents).map_err(|e| DatasetError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(entries = entries.len(), path = %path.display(), "Parsed sphere positions");
    Ok(SphereIndex::from_entries(entries))
}

/// Load the mapping CSV in file order.
///
/// Columns are resolved by header name. A row shorter than the header, or
/// a header missing a column entirely, yields empty fields instead of
/// failing the load: an empty field is a row-level skip, not a startup
/// error.
pub fn load_mappings(path: &Path) -> Result<Vec<MappingRow>> {
    let file = fs::File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers().map_err(|e| DatasetError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let url_idx = headers.iter().position(|h| h == "imgur_url");
    let filename_idx = headers.iter().position(|h| h == "firebase_filename");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DatasetError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows.push(MappingRow {
            imgur_url: field_at(&record, url_idx),
            firebase_filename: field_at(&record, filename_idx),
        });
    }

    debug!(rows = rows.len(), path = %path.display(), "Parsed mapping rows");
    Ok(rows)
}

fn field_at(record: &csv::StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
