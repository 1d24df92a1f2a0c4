//! Guess budgeting and selection
//!
//! Turns the refined candidate pool, or the frequency order when the pool is
//! inconclusive, into a conservative and an aggressive guess. Neither guess
//! ever contains a revealed or missed letter.

use crate::core::{RoundPattern, fold_case};
use std::fmt;

/// Which of the two guesses to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessKind {
    /// Half the remaining budget
    Conservative,
    /// The whole remaining budget
    Aggressive,
}

impl fmt::Display for GuessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "conservative"),
            Self::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// The two guesses computed for a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GuessPair {
    pub conservative: String,
    pub aggressive: String,
}

impl GuessPair {
    #[must_use]
    pub fn get(&self, kind: GuessKind) -> &str {
        match kind {
            GuessKind::Conservative => &self.conservative,
            GuessKind::Aggressive => &self.aggressive,
        }
    }
}

/// Letters of `source` that are still worth guessing
///
/// Revealed letters, missed letters, whitespace and control characters are
/// dropped, duplicates collapse to their first occurrence, and the original
/// relative order is kept.
///
/// # Examples
/// ```
/// use hangtite::core::{RoundPattern, BLANK_GLYPH};
/// use hangtite::solver::selector::undetermined_letters;
///
/// let pattern = RoundPattern::parse("␣pp␣␣", BLANK_GLYPH);
/// assert_eq!(undetermined_letters("apple", &pattern, &[]), "ale");
/// ```
#[must_use]
pub fn undetermined_letters(source: &str, pattern: &RoundPattern, missed: &[char]) -> String {
    let mut letters = String::new();
    for c in source.chars().map(fold_case) {
        if c.is_whitespace()
            || c.is_control()
            || missed.contains(&c)
            || pattern.is_revealed(c)
            || letters.contains(c)
        {
            continue;
        }
        letters.push(c);
    }
    letters
}

/// Letter budget for the conservative guess: half, rounded up
#[inline]
#[must_use]
pub const fn conservative_budget(remaining: usize) -> usize {
    remaining.div_ceil(2)
}

fn take_letters(letters: &str, budget: usize) -> String {
    letters.chars().take(budget).collect()
}

/// Pick both guesses for a round
///
/// - one candidate: both guesses are its undetermined letters
/// - two candidates: one guess per candidate, best-ranked first
/// - otherwise: the first letters of `fallback`, clipped to each budget
///
/// Candidate-derived guesses are never clipped: they name the letters of a
/// known answer.
#[must_use]
pub fn select(
    candidates: &[String],
    fallback: &str,
    pattern: &RoundPattern,
    missed: &[char],
    remaining: usize,
) -> GuessPair {
    match candidates {
        [only] => {
            let guess = undetermined_letters(only, pattern, missed);
            GuessPair {
                conservative: guess.clone(),
                aggressive: guess,
            }
        }
        [first, second] => GuessPair {
            conservative: undetermined_letters(first, pattern, missed),
            aggressive: undetermined_letters(second, pattern, missed),
        },
        _ => {
            let fallback = undetermined_letters(fallback, pattern, missed);
            GuessPair {
                conservative: take_letters(&fallback, conservative_budget(remaining)),
                aggressive: take_letters(&fallback, remaining),
            }
        }
    }
}
