//! Dataset record and index types
//!
//! Value types for the three inputs. The two indexes are built once by the
//! loaders and never mutated afterwards.

use serde::Deserialize;
use std::collections::HashMap;

/// A 3-element coordinate triple in fixed `(x, y, z)` order.
///
/// Coordinates stay as `serde_json::Number` so that integer inputs
/// stringify without a fractional part (`1` becomes `"1"`) and floats keep
/// theirs (`1.0` becomes `"1.0"`).
pub type SphereCoords = [serde_json::Number; 3];

/// One entry of the description dataset.
///
/// `id` and `description` must both be present; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionRecord {
    pub id: String,
    pub description: String,
}

/// One row of the mapping CSV, in file order.
///
/// Fields are empty when the row or the header does not carry the column.
/// An empty field is a row-level skip at sync time, not a load failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub imgur_url: String,
    pub firebase_filename: String,
}

/// Immutable lookup from record `id` to its description.
#[derive(Debug, Clone, Default)]
pub struct DescriptionIndex {
    entries: HashMap<String, String>,
}

impl DescriptionIndex {
    /// Build the index from records in input order. Duplicate ids keep the
    /// last occurrence.
    pub fn from_records(records: Vec<DescriptionRecord>) -> Self {
        let mut entries = HashMap::with_capacity(records.len());
        for record in records {
            entries.insert(record.id, record.description);
        }
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable lookup from key to its coordinate triple.
#[derive(Debug, Clone, Default)]
pub struct SphereIndex {
    entries: HashMap<String, SphereCoords>,
}

impl SphereIndex {
    pub fn from_entries(entries: HashMap<String, SphereCoords>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&SphereCoords> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_description_record_ignores_extra_fields() {
        let json = r#"{"id": "u1", "description": "Sunset", "width": 800}"#;

        let record: DescriptionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "u1");
        assert_eq!(record.description, "Sunset");
    }

    #[test]
    fn test_deserialize_description_record_requires_description() {
        let json = r#"{"id": "u1"}"#;

        let result: std::result::Result<DescriptionRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_description_index_last_duplicate_wins() {
        let records = vec![
            DescriptionRecord {
                id: "u1".to_string(),
                description: "first".to_string(),
            },
            DescriptionRecord {
                id: "u1".to_string(),
                description: "second".to_string(),
            },
        ];

        let index = DescriptionIndex::from_records(records);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("u1"), Some("second"));
    }

    #[test]
    fn test_sphere_coords_preserve_number_form() {
        let coords: SphereCoords = serde_json::from_str("[1.0, 2, -0.5]").unwrap();

        assert_eq!(coords[0].to_string(), "1.0");
        assert_eq!(coords[1].to_string(), "2");
        assert_eq!(coords[2].to_string(), "-0.5");
    }

    #[test]
    fn test_sphere_coords_reject_wrong_arity() {
        let result: std::result::Result<SphereCoords, _> = serde_json::from_str("[1.0, 2.0]");
        assert!(result.is_err());
    }

    #[test]
    fn test_sphere_index_lookup() {
        let mut entries = HashMap::new();
        entries.insert(
            "u1".to_string(),
            serde_json::from_str::<SphereCoords>("[1.0, 2.0, 3.0]").unwrap(),
        );

        let index = SphereIndex::from_entries(entries);
        assert!(index.get("u1").is_some());
        assert!(index.get("u2").is_none());
    }
}
