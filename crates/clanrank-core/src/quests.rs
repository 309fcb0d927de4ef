//! Quest-name → quest-point lookup table.
//!
//! Loaded from a YAML data file (`config/quests.yaml` by default) so the
//! mapping can track game updates without a code change. Validation happens
//! at load time: a duplicate or zero-value entry would silently skew every
//! report, so it fails loudly instead.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct QuestEntry {
    name: String,
    points: u32,
}

#[derive(Debug, Deserialize)]
struct QuestsFile {
    quests: Vec<QuestEntry>,
}

/// Validated quest point table.
#[derive(Debug, Clone)]
pub struct QuestPointTable {
    points: HashMap<String, u32>,
    total: u32,
}

impl QuestPointTable {
    /// Loads and validates the quest table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::QuestFileIo`] if the file cannot be read,
    /// [`CatalogError::QuestFileParse`] if it is not the expected shape, or
    /// a validation error for duplicate or zero-value entries.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::QuestFileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        let file: QuestsFile = serde_yaml::from_str(&content)?;
        Self::from_entries(file.quests.into_iter().map(|q| (q.name, q.points)))
    }

    /// Builds a table from `(name, points)` pairs, validating as it goes.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateQuest`] or
    /// [`CatalogError::ZeroPointQuest`] on the first invalid entry.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, u32)>,
    ) -> Result<Self, CatalogError> {
        let mut points = HashMap::new();
        let mut total = 0u32;
        for (name, value) in entries {
            if value == 0 {
                return Err(CatalogError::ZeroPointQuest(name));
            }
            if points.insert(name.clone(), value).is_some() {
                return Err(CatalogError::DuplicateQuest(name));
            }
            total += value;
        }
        Ok(Self { points, total })
    }

    /// Point value for a quest name, `0` for unmapped names.
    #[must_use]
    pub fn points_for(&self, name: &str) -> u32 {
        self.points.get(name).copied().unwrap_or(0)
    }

    /// Sum of every mapped quest's point value — the maximum attainable.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
