//! Shared test fixtures for integration tests.
//!
//! - `sample_catalog`: the three-exercise catalog used across search tests
//! - `catalog_file`: the same catalog written to a temp file, with a `CatalogState`
//!   pointed at it, for handler and reload tests

// Each integration test crate uses a different subset of these helpers
#![allow(dead_code)]

use rstest::fixture;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use workout_catalog_search::{Catalog, CatalogState, Config};

pub const SAMPLE_CATALOG: &str = r#"{
    "exercises": [
        { "id": 1, "name": "Bent Over Two Dumbbell Row", "alternateNames": ["DB Row"],
          "muscleGroup": "Back", "equipment": ["Dumbbell"] },
        { "id": 2, "name": "Barbell Bench Press", "muscleGroup": "Chest", "equipment": ["Barbell", "Bench"] },
        { "id": 3, "name": "Pull Up", "alternateNames": ["Chin Up"], "muscleGroup": "Back" }
    ],
    "equipment": [
        { "id": 10, "name": "Dumbbell", "category": "Free Weights" },
        { "id": 11, "name": "Barbell", "category": "Free Weights" },
        { "id": 12, "name": "Pull-Up Bar", "alternateNames": ["Chin-Up Bar"] }
    ]
}"#;

#[fixture]
pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(SAMPLE_CATALOG).expect("sample catalog parses")
}

/// A catalog file on disk plus server state loaded from it.
pub struct CatalogFile {
    _temp: TempDir,
    pub path: PathBuf,
    pub state: CatalogState,
}

impl CatalogFile {
    /// Replace the file contents (the loaded state is untouched until a reload).
    pub fn rewrite(&self, contents: &str) {
        let mut file = std::fs::File::create(&self.path).expect("rewrite catalog file");
        file.write_all(contents.as_bytes()).expect("write catalog file");
    }
}

#[fixture]
pub fn catalog_file() -> CatalogFile {
    workout_catalog_search::tracing::init_test();

    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("catalog.json");
    std::fs::write(&path, SAMPLE_CATALOG).expect("write catalog file");

    let config = Config {
        catalog_path: path.clone(),
        default_limit: 2,
        max_limit: 5,
    };
    let catalog = Catalog::from_json_str(SAMPLE_CATALOG).expect("sample catalog parses");
    let state = CatalogState::new(config, catalog);

    CatalogFile {
        _temp: temp,
        path,
        state,
    }
}

/// Ids of a slice of search results.
pub fn ids<T, F: Fn(&T) -> u32>(items: &[&T], id: F) -> Vec<u32> {
    items.iter().map(|item| id(*item)).collect()
}
