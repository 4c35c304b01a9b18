//! Loader integration tests against real files on disk.

use core_dataset::{load_descriptions, load_mappings, load_spheres, DatasetError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn load_descriptions_indexes_by_id() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "meta.json",
        r#"[
            {"id": "u1", "description": "Sunset"},
            {"id": "u2", "description": "Harbor"}
        ]"#,
    );

    let index = load_descriptions(&path).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("u1"), Some("Sunset"));
    assert_eq!(index.get("u2"), Some("Harbor"));
}

#[test]
fn load_descriptions_last_duplicate_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "meta.json",
        r#"[
            {"id": "u1", "description": "old"},
            {"id": "u1", "description": "new"}
        ]"#,
    );

    let index = load_descriptions(&path).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("u1"), Some("new"));
}

#[test]
fn load_descriptions_missing_field_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "meta.json", r#"[{"id": "u1"}]"#);

    let result = load_descriptions(&path);
    assert!(matches!(result, Err(DatasetError::Parse { .. })));
}

#[test]
fn load_descriptions_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let result = load_descriptions(&path);
    assert!(matches!(result, Err(DatasetError::Io { .. })));
}

#[test]
fn load_spheres_reads_direct_mapping() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "sphere.json",
        r#"{"u1": [1.0, 2.0, 3.0], "u2": [0, -1, 4.5]}"#,
    );

    let index = load_spheres(&path).unwrap();
    assert_eq!(index.len(), 2);

    let coords = index.get("u1").unwrap();
    assert_eq!(coords[0].to_string(), "1.0");
    assert_eq!(coords[1].to_string(), "2.0");
    assert_eq!(coords[2].to_string(), "3.0");

    let coords = index.get("u2").unwrap();
    assert_eq!(coords[0].to_string(), "0");
    assert_eq!(coords[2].to_string(), "4.5");
}

#[test]
fn load_spheres_rejects_wrong_arity() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sphere.json", r#"{"u1": [1.0, 2.0]}"#);

    let result = load_spheres(&path);
    assert!(matches!(result, Err(DatasetError::Parse { .. })));
}

#[test]
fn load_mappings_preserves_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mapping.csv",
        "imgur_url,firebase_filename\nu1,img1.jpg\nu2,img2.jpg\n",
    );

    let rows = load_mappings(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].imgur_url, "u1");
    assert_eq!(rows[0].firebase_filename, "img1.jpg");
    assert_eq!(rows[1].imgur_url, "u2");
}

#[test]
fn load_mappings_short_rows_yield_empty_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mapping.csv",
        "imgur_url,firebase_filename\nu1\n,img2.jpg\n",
    );

    let rows = load_mappings(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].imgur_url, "u1");
    assert_eq!(rows[0].firebase_filename, "");
    assert_eq!(rows[1].imgur_url, "");
    assert_eq!(rows[1].firebase_filename, "img2.jpg");
}

#[test]
fn load_mappings_missing_column_yields_empty_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "mapping.csv", "imgur_url\nu1\nu2\n");

    let rows = load_mappings(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].imgur_url, "u1");
    assert_eq!(rows[0].firebase_filename, "");
    assert_eq!(rows[1].imgur_url, "u2");
    assert_eq!(rows[1].firebase_filename, "");
}

#[test]
fn load_mappings_resolves_columns_by_header_name() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mapping.csv",
        "firebase_filename,imgur_url\nimg1.jpg,u1\n",
    );

    let rows = load_mappings(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].imgur_url, "u1");
    assert_eq!(rows[0].firebase_filename, "img1.jpg");
}

#[test]
fn load_mappings_ignores_extra_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mapping.csv",
        "imgur_url,firebase_filename,notes\nu1,img1.jpg,keep\n",
    );

    let rows = load_mappings(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].imgur_url, "u1");
    assert_eq!(rows[0].firebase_filename, "img1.jpg");
}
