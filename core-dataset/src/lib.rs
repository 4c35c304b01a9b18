//! # Dataset Loading Module
//!
//! Loads and indexes the three input datasets the metadata sync joins:
//!
//! - A JSON array of `{id, description}` records, indexed by `id`
//! - A JSON object mapping each key to a 3-element coordinate array
//! - A headered CSV mapping `imgur_url` to `firebase_filename`, kept in
//!   file order
//!
//! All three are loaded once at startup and held read-only afterwards. Any
//! failure here (missing file, unparsable content) is fatal: the sync never
//! starts on partial inputs.

pub mod error;
pub mod loader;
pub mod records;

pub use error::{DatasetError, Result};
pub use loader::{load_descriptions, load_mappings, load_spheres};
pub use records::{DescriptionIndex, DescriptionRecord, MappingRow, SphereCoords, SphereIndex};
