//! Positional refinement of paged candidates
//!
//! The mask test only speaks about the most frequent letters as a whole. This
//! filter re-checks every candidate position by position: revealed slots must
//! match exactly and blank slots must not hold a missed letter.

use crate::core::{RoundPattern, Slot, fold_case};

/// Exact per-position template for one round
#[derive(Debug, Clone)]
pub struct PatternFilter {
    slots: Vec<Slot>,
    missed: Vec<char>,
}

impl PatternFilter {
    #[must_use]
    pub fn new(pattern: &RoundPattern, missed: &[char]) -> Self {
        Self {
            slots: pattern.slots().to_vec(),
            missed: missed.iter().copied().map(fold_case).collect(),
        }
    }

    /// Check a candidate word against the template
    ///
    /// # Examples
    /// ```
    /// use hangtite::core::{RoundPattern, BLANK_GLYPH};
    /// use hangtite::solver::PatternFilter;
    ///
    /// let pattern = RoundPattern::parse("␣pp␣␣", BLANK_GLYPH);
    /// let filter = PatternFilter::new(&pattern, &['y']);
    /// assert!(filter.matches("apple"));
    /// assert!(!filter.matches("apply"));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars().map(fold_case);
        for slot in &self.slots {
            let Some(c) = chars.next() else {
                return false;
            };
            let ok = match slot {
                Slot::Letter(expected) => c == *expected,
                Slot::Blank => !self.missed.contains(&c),
            };
            if !ok {
                return false;
            }
        }
        chars.next().is_none()
    }

    /// Keep only the matching words, preserving order
    #[must_use]
    pub fn refine(&self, words: Vec<String>) -> Vec<String> {
        words.into_iter().filter(|w| self.matches(w)).collect()
    }
}
