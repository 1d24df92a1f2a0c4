//! Read-only word and frequency stores
//!
//! Each category has its own store holding per-length frequency profiles and
//! dictionary words annotated with presence/absence masks. Stores are only
//! ever read while a round is being solved.

pub mod file;
pub mod memory;
mod record;

pub use file::CategoryDir;
pub use memory::{MemoryCatalog, MemoryStore};
pub use record::WordRecord;

use crate::core::{FrequencyProfile, RoundPattern};
use crate::solver::mask::MaskConstraint;
use thiserror::Error;

/// Errors a backing store can report
#[derive(Debug, Error)]
pub enum StoreError {
    /// No store exists for the category
    #[error("no word store for category \"{category}\": {reason}")]
    Unavailable { category: String, reason: String },

    /// A query against an existing store failed
    #[error("store query failed: {0}")]
    Query(String),

    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Candidate predicate: length, revealed positions, and mask tests
#[derive(Debug, Clone, Copy)]
pub struct CandidateQuery<'a> {
    pub length: usize,
    pub pattern: &'a RoundPattern,
    pub masks: MaskConstraint,
}

impl<'a> CandidateQuery<'a> {
    #[must_use]
    pub fn new(pattern: &'a RoundPattern, masks: MaskConstraint) -> Self {
        Self {
            length: pattern.len(),
            pattern,
            masks,
        }
    }

    /// Full predicate for one stored record
    #[must_use]
    pub fn matches(&self, record: &WordRecord) -> bool {
        record.len() == self.length
            && self.masks.admits(record.presence(), record.absence())
            && self.pattern.fits(record.text())
    }
}

/// Read access to one category's data
pub trait WordStore {
    /// Point lookup of the profile for a word length
    ///
    /// # Errors
    /// Returns `StoreError` if the lookup itself fails; a missing row is `Ok(None)`.
    fn frequency_profile(&self, length: usize) -> Result<Option<FrequencyProfile>, StoreError>;

    /// One page of matching words, in rank order
    ///
    /// Ordering is deterministic: mask rank first, then the word text.
    ///
    /// # Errors
    /// Returns `StoreError::Query` if the page cannot be read.
    fn words_page(
        &self,
        query: &CandidateQuery<'_>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<String>, StoreError>;
}

impl<T: WordStore + ?Sized> WordStore for &T {
    fn frequency_profile(&self, length: usize) -> Result<Option<FrequencyProfile>, StoreError> {
        (**self).frequency_profile(length)
    }

    fn words_page(
        &self,
        query: &CandidateQuery<'_>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<String>, StoreError> {
        (**self).words_page(query, offset, limit)
    }
}

/// Opens the store for a category
pub trait StoreProvider {
    /// # Errors
    /// Returns `StoreError::Unavailable` when the category has no store, or
    /// another variant when it exists but cannot be read.
    fn open(&self, category: &str) -> Result<Box<dyn WordStore + '_>, StoreError>;
}

impl<T: StoreProvider + ?Sized> StoreProvider for &T {
    fn open(&self, category: &str) -> Result<Box<dyn WordStore + '_>, StoreError> {
        (**self).open(category)
    }
}
