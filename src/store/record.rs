//! Dictionary entries with precomputed masks

use crate::core::{FrequencyProfile, fold_case};
use crate::solver::mask::word_masks;
use std::fmt;

/// One dictionary word for a given length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordRecord {
    text: String,
    len: usize,
    presence: u32,
    absence: u32,
}

impl WordRecord {
    /// Create a record, computing masks against `profile`
    ///
    /// The text is lowercased first.
    #[must_use]
    pub fn new(text: &str, profile: &FrequencyProfile) -> Self {
        let text: String = text.chars().map(fold_case).collect();
        let (presence, absence) = word_masks(&text, profile);
        Self {
            len: text.chars().count(),
            text,
            presence,
            absence,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn presence(&self) -> u32 {
        self.presence
    }

    #[inline]
    #[must_use]
    pub const fn absence(&self) -> u32 {
        self.absence
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
