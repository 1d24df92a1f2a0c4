//! Letter-frequency profiles
//!
//! A profile ranks letters most-frequent-first for one `(category, length)`
//! pair. Its short prefix is the set of letters promoted to bitmask slots.

use super::pattern::fold_case;

/// Generic English letter order, measured over roughly 40,000 words
pub const ENGLISH_ORDER: &str = "etaoinsrhdlucmfywgpbvkxqjz";

/// Masks are `u32`, so at most 32 letters get a bit slot
pub const MAX_BIT_WIDTH: usize = 32;

/// Where a profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileSource {
    /// Row read from the category's store
    Learned,
    /// Built-in order; carries no bitmask data
    Default,
}

/// Ranked letter statistics for one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyProfile {
    full_order: String,
    short_prefix: Vec<char>,
    source: ProfileSource,
}

impl FrequencyProfile {
    /// Create a learned profile
    ///
    /// `short` supplies the bitmask letters; the first `bits` of them are
    /// promoted (capped at [`MAX_BIT_WIDTH`]). When `short` is `None`, the
    /// prefix is taken from `full` instead.
    ///
    /// # Examples
    /// ```
    /// use hangtite::core::FrequencyProfile;
    ///
    /// let profile = FrequencyProfile::learned("EAOIRTLNSC", None, 4);
    /// assert_eq!(profile.full_order(), "eaoirtlnsc");
    /// assert_eq!(profile.short_prefix(), &['e', 'a', 'o', 'i']);
    /// assert_eq!(profile.full_mask(), 0b1111);
    /// ```
    #[must_use]
    pub fn learned(full: &str, short: Option<&str>, bits: usize) -> Self {
        let full_order: String = full.chars().map(fold_case).collect();
        let width = bits.min(MAX_BIT_WIDTH);
        let short_prefix = short
            .unwrap_or(&full_order)
            .chars()
            .map(fold_case)
            .take(width)
            .collect();

        Self {
            full_order,
            short_prefix,
            source: ProfileSource::Learned,
        }
    }

    /// Create a default profile with no bitmask slots
    #[must_use]
    pub fn fallback(order: &str) -> Self {
        Self {
            full_order: order.chars().map(fold_case).collect(),
            short_prefix: Vec::new(),
            source: ProfileSource::Default,
        }
    }

    /// Full letter order, most frequent first
    #[inline]
    #[must_use]
    pub fn full_order(&self) -> &str {
        &self.full_order
    }

    #[inline]
    #[must_use]
    pub fn short_prefix(&self) -> &[char] {
        &self.short_prefix
    }

    /// Number of letters with a bitmask slot
    #[inline]
    #[must_use]
    pub fn bit_width(&self) -> usize {
        self.short_prefix.len()
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> ProfileSource {
        self.source
    }

    /// True when bitmask filtering can be applied with this profile
    #[inline]
    #[must_use]
    pub fn has_bitmask(&self) -> bool {
        !self.short_prefix.is_empty()
    }

    /// Bit slot of a letter, if it is one of the promoted letters
    #[must_use]
    pub fn slot_of(&self, letter: char) -> Option<usize> {
        let letter = fold_case(letter);
        self.short_prefix.iter().position(|&c| c == letter)
    }

    /// All `bit_width` bits set
    #[must_use]
    pub fn full_mask(&self) -> u32 {
        match self.bit_width() {
            0 => 0,
            MAX_BIT_WIDTH => u32::MAX,
            width => (1u32 << width) - 1,
        }
    }
}

impl Default for FrequencyProfile {
    fn default() -> Self {
        Self::fallback(ENGLISH_ORDER)
    }
}
