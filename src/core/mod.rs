//! Core domain types for hangman rounds
//!
//! This module contains the pure domain types: patterns, rounds, and
//! frequency profiles. Nothing here touches storage or I/O.

mod pattern;
mod profile;
mod round;

pub use pattern::{BLANK_GLYPH, RoundPattern, Slot, fold_case};
pub use profile::{ENGLISH_ORDER, FrequencyProfile, MAX_BIT_WIDTH, ProfileSource};
pub use round::{RoundParser, RoundState};
