//! Per-category store files
//!
//! A store directory holds one `<category>.json` file per category:
//!
//! ```json
//! {
//!   "frequencies": [{ "length": 5, "full": "eaoirtlnsc", "short": "eaoirt", "bits": 6 }],
//!   "words": ["apple", "tiger"]
//! }
//! ```
//!
//! `short` is optional and defaults to the start of `full`. Word masks are
//! computed once, when the file is loaded.

use super::{MemoryStore, StoreError, StoreProvider, WordStore};
use crate::core::FrequencyProfile;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One row of the frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub length: usize,
    pub full: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    pub bits: usize,
}

/// On-disk layout of one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub frequencies: Vec<FrequencyRow>,
    #[serde(default)]
    pub words: Vec<String>,
}

impl StoreFile {
    /// Index the file's contents
    #[must_use]
    pub fn into_store(self) -> MemoryStore {
        let mut store = MemoryStore::new();
        for row in self.frequencies {
            store.insert_profile(
                row.length,
                FrequencyProfile::learned(&row.full, row.short.as_deref(), row.bits),
            );
        }
        for word in &self.words {
            store.insert_word(word.trim());
        }
        store
    }
}

/// Load one store file
///
/// # Errors
/// Returns `StoreError::Io` if the file cannot be read, or `StoreError::Json`
/// if it is not a valid store file.
pub fn load(path: &Path) -> Result<MemoryStore, StoreError> {
    let content = fs::read_to_string(path)?;
    let file: StoreFile = serde_json::from_str(&content)?;
    let store = file.into_store();
    debug!(
        "loaded {} ({} profiles, {} words)",
        path.display(),
        store.profile_count(),
        store.word_count()
    );
    Ok(store)
}

/// Directory of per-category store files
///
/// Files are opened on demand, once per round.
#[derive(Debug, Clone)]
pub struct CategoryDir {
    root: PathBuf,
}

impl CategoryDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a category, if the name is safe to use as a file name
    #[must_use]
    pub fn path_for(&self, category: &str) -> Option<PathBuf> {
        let unsafe_name = category.is_empty()
            || category.starts_with('.')
            || category.contains(['/', '\\', '\0']);
        if unsafe_name {
            return None;
        }
        Some(self.root.join(format!("{category}.json")))
    }
}

impl StoreProvider for CategoryDir {
    fn open(&self, category: &str) -> Result<Box<dyn WordStore + '_>, StoreError> {
        let unavailable = |reason: String| StoreError::Unavailable {
            category: category.to_string(),
            reason,
        };

        let path = self
            .path_for(category)
            .ok_or_else(|| unavailable("not a usable file name".to_string()))?;
        if !path.is_file() {
            return Err(unavailable(format!("no file {}", path.display())));
        }

        Ok(Box::new(load(&path)?))
    }
}
