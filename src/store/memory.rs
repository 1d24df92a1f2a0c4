//! In-memory indexed store
//!
//! Profiles are keyed by length; words are indexed by length and kept sorted
//! by text, which gives the final tie-break of the ordering for free. The
//! ranked matches of the last query are kept so that paging through them
//! filters and sorts once.

use super::{CandidateQuery, StoreError, StoreProvider, WordRecord, WordStore};
use crate::core::{FrequencyProfile, RoundPattern};
use crate::solver::mask::MaskConstraint;
use log::debug;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Ranked matches of one query
#[derive(Debug, Clone)]
struct RankedMatches {
    length: usize,
    pattern: RoundPattern,
    masks: MaskConstraint,
    words: Vec<String>,
}

impl RankedMatches {
    fn answers(&self, query: &CandidateQuery<'_>) -> bool {
        self.length == query.length && self.masks == query.masks && self.pattern == *query.pattern
    }
}

/// One category's profiles and words
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: BTreeMap<usize, FrequencyProfile>,
    words: BTreeMap<usize, BTreeMap<String, WordRecord>>,
    ranked: RefCell<Option<RankedMatches>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the profile for a length
    ///
    /// Masks of words already stored at that length are recomputed.
    pub fn insert_profile(&mut self, length: usize, profile: FrequencyProfile) {
        if let Some(bucket) = self.words.get_mut(&length) {
            for record in bucket.values_mut() {
                *record = WordRecord::new(record.text(), &profile);
            }
        }
        self.profiles.insert(length, profile);
        self.ranked.get_mut().take();
    }

    /// Insert a word, masking it with its length's profile
    ///
    /// Returns `false` if the word was already present. Words whose length
    /// has no profile get empty masks.
    pub fn insert_word(&mut self, text: &str) -> bool {
        let unmasked = WordRecord::new(text, &FrequencyProfile::default());
        let length = unmasked.len();
        let record = match self.profiles.get(&length) {
            Some(profile) => WordRecord::new(text, profile),
            None => unmasked,
        };

        let bucket = self.words.entry(length).or_default();
        if bucket.contains_key(record.text()) {
            return false;
        }
        bucket.insert(record.text().to_string(), record);
        self.ranked.get_mut().take();
        true
    }

    /// Builder form of [`insert_profile`](Self::insert_profile)
    #[must_use]
    pub fn with_profile(mut self, length: usize, profile: FrequencyProfile) -> Self {
        self.insert_profile(length, profile);
        self
    }

    /// Builder form of [`insert_word`](Self::insert_word) for many words
    #[must_use]
    pub fn with_words<'w>(mut self, words: impl IntoIterator<Item = &'w str>) -> Self {
        for word in words {
            self.insert_word(word);
        }
        self
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    fn rank(&self, query: &CandidateQuery<'_>) -> RankedMatches {
        let mut matching: Vec<&WordRecord> = self
            .words
            .get(&query.length)
            .map(|bucket| bucket.values().filter(|r| query.matches(r)).collect())
            .unwrap_or_default();

        // Stable sort keeps the text order within equal ranks
        matching.sort_by_key(|r| query.masks.rank(r.presence(), r.absence()));
        debug!("length {} matched {} words", query.length, matching.len());

        RankedMatches {
            length: query.length,
            pattern: query.pattern.clone(),
            masks: query.masks,
            words: matching.into_iter().map(|r| r.text().to_string()).collect(),
        }
    }
}

impl WordStore for MemoryStore {
    fn frequency_profile(&self, length: usize) -> Result<Option<FrequencyProfile>, StoreError> {
        Ok(self.profiles.get(&length).cloned())
    }

    fn words_page(
        &self,
        query: &CandidateQuery<'_>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<String>, StoreError> {
        let mut cache = self.ranked.borrow_mut();
        let ranked = match cache.take() {
            Some(ranked) if ranked.answers(query) => ranked,
            _ => self.rank(query),
        };

        let page = ranked.words.iter().skip(offset).take(limit).cloned().collect();
        *cache = Some(ranked);
        Ok(page)
    }
}

/// Stores for several categories held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    stores: FxHashMap<String, MemoryStore>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, store: MemoryStore) {
        self.stores.insert(category.into(), store);
    }

    #[must_use]
    pub fn with(mut self, category: impl Into<String>, store: MemoryStore) -> Self {
        self.insert(category, store);
        self
    }
}

impl StoreProvider for MemoryCatalog {
    fn open(&self, category: &str) -> Result<Box<dyn WordStore + '_>, StoreError> {
        match self.stores.get(category) {
            Some(store) => Ok(Box::new(store)),
            None => Err(StoreError::Unavailable {
                category: category.to_string(),
                reason: "not loaded".to_string(),
            }),
        }
    }
}
