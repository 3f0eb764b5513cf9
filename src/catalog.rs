//! Exercise and equipment catalog backed by one search index per item kind.

use crate::error::CatalogError;
use crate::search::{SearchIndex, Searchable};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// A catalog exercise, e.g. "Bent Over Two Dumbbell Row".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    /// Other names the exercise goes by ("DB Row")
    #[serde(default)]
    pub alternate_names: Vec<String>,
    #[serde(default)]
    pub muscle_group: Option<String>,
    /// Names of the equipment the exercise uses. Display only, not searchable.
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Searchable for Exercise {
    fn searchable_text(&self) -> Vec<Option<&str>> {
        let mut text = Vec::with_capacity(self.alternate_names.len() + 2);
        text.push(Some(self.name.as_str()));
        text.extend(self.alternate_names.iter().map(|alt| Some(alt.as_str())));
        text.push(self.muscle_group.as_deref());
        text
    }
}

/// A piece of catalog equipment, e.g. "Dumbbell".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Searchable for Equipment {
    fn searchable_text(&self) -> Vec<Option<&str>> {
        let mut text = Vec::with_capacity(self.alternate_names.len() + 2);
        text.push(Some(self.name.as_str()));
        text.extend(self.alternate_names.iter().map(|alt| Some(alt.as_str())));
        text.push(self.category.as_deref());
        text
    }
}

/// Raw catalog contents as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

/// Searchable catalog.
///
/// Immutable once built. A changed catalog file is picked up by building a new
/// `Catalog`, never by editing this one.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: SearchIndex<Exercise>,
    equipment: SearchIndex<Equipment>,
}

impl Catalog {
    /// Indexes `data`, rejecting duplicate ids within a kind.
    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        let start = Instant::now();
        check_unique_ids("exercise", data.exercises.iter().map(|e| e.id))?;
        check_unique_ids("equipment", data.equipment.iter().map(|e| e.id))?;

        let catalog = Self {
            exercises: SearchIndex::from_searchable(data.exercises),
            equipment: SearchIndex::from_searchable(data.equipment),
        };

        tracing::info!(
            "Built catalog: {} exercises ({} terms), {} equipment ({} terms) in {:?}",
            catalog.exercises.len(),
            catalog.exercises.term_count(),
            catalog.equipment.len(),
            catalog.equipment.term_count(),
            start.elapsed()
        );

        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_data(serde_json::from_str(json)?)
    }

    /// Reads and indexes the catalog JSON file at `path`.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        tracing::info!("Loading catalog from {}", path.display());
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&json)
    }

    pub fn exercises(&self) -> &SearchIndex<Exercise> {
        &self.exercises
    }

    pub fn equipment(&self) -> &SearchIndex<Equipment> {
        &self.equipment
    }

    /// Looks up an exercise by catalog id.
    pub fn exercise(&self, id: u32) -> Option<&Exercise> {
        self.exercises.corpus().iter().find(|e| e.id == id)
    }

    /// Looks up equipment by catalog id.
    pub fn equipment_item(&self, id: u32) -> Option<&Equipment> {
        self.equipment.corpus().iter().find(|e| e.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            exercises: SearchIndex::from_searchable(vec![]),
            equipment: SearchIndex::from_searchable(vec![]),
        }
    }
}

fn check_unique_ids(
    kind: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), CatalogError> {
    let mut seen = AHashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(())
}
