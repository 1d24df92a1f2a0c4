//! Round state and status-line parsing
//!
//! The game announces each round as a channel message of the form
//! `<pattern> [<missed>] <used>/<total> (<category>)`, sent by the game's
//! nick. Anything else in the channel is ignored.

use super::pattern::{BLANK_GLYPH, RoundPattern, fold_case};
use regex::Regex;
use std::sync::LazyLock;

static STATUS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+)\s+\[(.*)\]\s+(\d+)/(\d+)\s+\((.+)\)\s*$")
        .expect("status-line grammar is a valid regex")
});

/// One active puzzle round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    player: String,
    pattern: RoundPattern,
    missed: Vec<char>,
    used: u32,
    total: u32,
    category: String,
}

impl RoundState {
    /// Build a round from already-structured parts
    ///
    /// Missed letters are lowercased and deduplicated; characters that are
    /// not alphanumeric are dropped. Returns `None` if `used > total`.
    #[must_use]
    pub fn new(
        player: impl Into<String>,
        pattern: RoundPattern,
        missed: &str,
        used: u32,
        total: u32,
        category: impl Into<String>,
    ) -> Option<Self> {
        if used > total {
            return None;
        }

        let mut letters: Vec<char> = Vec::with_capacity(missed.len());
        for c in missed.chars().filter(|c| c.is_alphanumeric()).map(fold_case) {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }

        Some(Self {
            player: player.into(),
            pattern,
            missed: letters,
            used,
            total,
            category: category.into(),
        })
    }

    /// Nick of whoever posted the status line; guesses are addressed to it
    #[inline]
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &RoundPattern {
        &self.pattern
    }

    /// Letters already guessed and rejected, in announcement order
    #[inline]
    #[must_use]
    pub fn missed(&self) -> &[char] {
        &self.missed
    }

    #[inline]
    #[must_use]
    pub const fn used(&self) -> u32 {
        self.used
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Wrong guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.total - self.used
    }

    /// Check if a letter is already revealed or already missed
    #[must_use]
    pub fn is_known(&self, letter: char) -> bool {
        let letter = fold_case(letter);
        self.missed.contains(&letter) || self.pattern.is_revealed(letter)
    }
}

/// Extracts [`RoundState`] from channel messages
#[derive(Debug, Clone, Copy)]
pub struct RoundParser {
    blank: char,
}

impl RoundParser {
    #[must_use]
    pub const fn new(blank: char) -> Self {
        Self { blank }
    }

    /// Parse a message body posted by `sender`
    ///
    /// Returns `None` for anything that is not a round announcement.
    ///
    /// # Examples
    /// ```
    /// use hangtite::core::RoundParser;
    ///
    /// let parser = RoundParser::default();
    /// let round = parser.parse("GameBot", "␣a␣␣e [xyz] 1/6 (animals)").unwrap();
    /// assert_eq!(round.player(), "GameBot");
    /// assert_eq!(round.pattern().to_string(), "_a__e");
    /// assert_eq!(round.missed(), &['x', 'y', 'z']);
    /// assert_eq!(round.remaining(), 5);
    /// assert_eq!(round.category(), "animals");
    ///
    /// assert!(parser.parse("someone", "hello there").is_none());
    /// ```
    #[must_use]
    pub fn parse(&self, sender: &str, message: &str) -> Option<RoundState> {
        let caps = STATUS_LINE.captures(message)?;
        let used: u32 = caps[3].parse().ok()?;
        let total: u32 = caps[4].parse().ok()?;

        RoundState::new(
            sender,
            RoundPattern::parse(&caps[1], self.blank),
            &caps[2],
            used,
            total,
            &caps[5],
        )
    }

    /// Parse a raw `<sender> <message>` line
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Option<RoundState> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (sender, message) = line.split_once(char::is_whitespace)?;
        if sender.is_empty() {
            return None;
        }
        self.parse(sender, message.trim_start())
    }
}

impl Default for RoundParser {
    fn default() -> Self {
        Self::new(BLANK_GLYPH)
    }
}
