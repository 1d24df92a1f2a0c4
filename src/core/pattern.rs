//! Revealed-word pattern
//!
//! A pattern is the puzzle word as the game announces it: revealed letters in
//! place, unrevealed positions rendered with a placeholder glyph. Blanks are a
//! separate [`Slot`] variant, so they can never collide with a real letter.

use std::fmt;

/// Placeholder glyph the game uses for unrevealed positions (U+2423)
pub const BLANK_GLYPH: char = '␣';

/// Lowercase a single character, keeping it unchanged if it has no
/// single-character lowercase form.
#[inline]
#[must_use]
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// One position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Not yet revealed
    Blank,
    /// Revealed literal character (lowercase)
    Letter(char),
}

/// Ordered sequence of revealed letters and blanks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundPattern {
    slots: Vec<Slot>,
}

impl RoundPattern {
    /// Parse a pattern, treating every `blank` glyph as an unrevealed slot
    ///
    /// Every other character is a literal, lowercased. Spaces and punctuation
    /// in multi-word puzzles stay literal too.
    ///
    /// # Examples
    /// ```
    /// use hangtite::core::{RoundPattern, Slot, BLANK_GLYPH};
    ///
    /// let pattern = RoundPattern::parse("␣A␣␣E", BLANK_GLYPH);
    /// assert_eq!(pattern.len(), 5);
    /// assert_eq!(pattern.slots()[1], Slot::Letter('a'));
    /// assert_eq!(pattern.to_string(), "_a__e");
    /// ```
    #[must_use]
    pub fn parse(text: &str, blank: char) -> Self {
        let slots = text
            .chars()
            .map(|c| {
                if c == blank {
                    Slot::Blank
                } else {
                    Slot::Letter(fold_case(c))
                }
            })
            .collect();
        Self { slots }
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Word length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Revealed letters in position order (duplicates included)
    pub fn revealed(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Letter(c) => Some(*c),
            Slot::Blank => None,
        })
    }

    /// Check if a letter is already revealed somewhere in the pattern
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        let letter = fold_case(letter);
        self.revealed().any(|c| c == letter)
    }

    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.slots.iter().filter(|s| matches!(s, Slot::Blank)).count()
    }

    /// Check a word against the revealed positions only
    ///
    /// Blanks accept any character. This is the coarse positional test a
    /// store can apply while scanning; exclusion of missed letters happens in
    /// the refinement filter.
    #[must_use]
    pub fn fits(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for slot in &self.slots {
            match (slot, chars.next()) {
                (_, None) => return false,
                (Slot::Letter(expected), Some(actual)) if *expected != fold_case(actual) => {
                    return false;
                }
                _ => {}
            }
        }
        chars.next().is_none()
    }
}

impl fmt::Display for RoundPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Blank => f.write_str("_")?,
                Slot::Letter(c) => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
