//! Round-processing engine
//!
//! Holds the single live round and the guesses computed for it. A new round
//! announcement replaces both wholesale.

use super::filter::PatternFilter;
use super::mask::MaskConstraint;
use super::pager::{self, PagerConfig};
use super::selector::{self, GuessKind, GuessPair};
use crate::core::{BLANK_GLYPH, ENGLISH_ORDER, FrequencyProfile, RoundParser, RoundState};
use crate::store::{CandidateQuery, StoreProvider};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Tunables for the engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub pager: PagerConfig,
    /// Glyph the game uses for unrevealed positions
    pub blank_glyph: char,
    /// Letter order used when a category has no learned profile
    pub default_order: String,
    /// Per-category override of `default_order`
    pub category_defaults: FxHashMap<String, String>,
}

impl EngineConfig {
    #[must_use]
    pub fn default_order_for(&self, category: &str) -> &str {
        self.category_defaults
            .get(category)
            .map_or(self.default_order.as_str(), String::as_str)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pager: PagerConfig::default(),
            blank_glyph: BLANK_GLYPH,
            default_order: ENGLISH_ORDER.to_string(),
            category_defaults: FxHashMap::default(),
        }
    }
}

/// Where the round's letter order came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOrigin {
    /// Learned profile; candidates were retrieved from the store
    Learned,
    /// Store opened but has no profile for this length
    NoProfile,
    /// Store missing or unreadable
    Unavailable(String),
}

/// Diagnostics for one solved round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub origin: ProfileOrigin,
    pub length: usize,
    /// Frequency order minus known letters
    pub fallback: String,
    /// Best-ranked candidates, at most a handful
    pub preview: Vec<String>,
    pub candidate_count: usize,
    pub pages: usize,
    /// Pages whose query failed; the pool may be incomplete
    pub failed_pages: usize,
    pub capped: bool,
    pub elapsed: Duration,
}

impl RoundReport {
    /// Preview size: fewer entries for long words
    #[must_use]
    pub const fn preview_len(length: usize) -> usize {
        if length > 10 { 3 } else { 5 }
    }
}

/// A solved round
#[derive(Debug, Clone)]
struct Round {
    state: RoundState,
    guesses: GuessPair,
    report: RoundReport,
}

/// Hangman guess engine over a category store provider
///
/// # Examples
/// ```
/// use hangtite::core::FrequencyProfile;
/// use hangtite::solver::{Engine, EngineConfig, GuessKind};
/// use hangtite::store::{MemoryCatalog, MemoryStore};
///
/// let fruit = MemoryStore::new()
///     .with_profile(5, FrequencyProfile::learned("eaplmnorst", None, 6))
///     .with_words(["apple", "mango", "lemon"]);
/// let mut engine = Engine::new(MemoryCatalog::new().with("fruit", fruit), EngineConfig::default());
///
/// engine.ingest("bot", "␣pp␣␣ [] 0/6 (fruit)");
/// assert_eq!(engine.request_guess(GuessKind::Conservative), Some("ale"));
/// assert_eq!(engine.outgoing(GuessKind::Aggressive, ":").as_deref(), Some("bot: ale"));
/// ```
pub struct Engine<P> {
    provider: P,
    config: EngineConfig,
    parser: RoundParser,
    enabled: bool,
    round: Option<Round>,
}

impl<P: StoreProvider> Engine<P> {
    /// Create an enabled engine with no live round
    pub fn new(provider: P, config: EngineConfig) -> Self {
        let parser = RoundParser::new(config.blank_glyph);
        Self {
            provider,
            config,
            parser,
            enabled: true,
            round: None,
        }
    }

    /// Feed one channel message
    ///
    /// If it announces a round, that round replaces the live one and its
    /// report is returned. Other messages, and every message while the
    /// engine is disabled, change nothing.
    pub fn ingest(&mut self, sender: &str, message: &str) -> Option<&RoundReport> {
        if !self.enabled {
            return None;
        }
        let state = self.parser.parse(sender, message)?;
        Some(self.replace_round(state))
    }

    /// Feed one raw `<sender> <message>` line
    pub fn ingest_line(&mut self, line: &str) -> Option<&RoundReport> {
        if !self.enabled {
            return None;
        }
        let state = self.parser.parse_line(line)?;
        Some(self.replace_round(state))
    }

    fn replace_round(&mut self, state: RoundState) -> &RoundReport {
        let (guesses, report) = self.solve(&state);
        let round = self.round.insert(Round {
            state,
            guesses,
            report,
        });
        &round.report
    }

    /// Compute guesses for a round without touching the live one
    #[must_use]
    pub fn solve(&self, state: &RoundState) -> (GuessPair, RoundReport) {
        let started = Instant::now();
        let pattern = state.pattern();
        let length = pattern.len();
        let default_order = self.config.default_order_for(state.category());

        let mut candidates = Vec::new();
        let mut pages = 0;
        let mut failed_pages = 0;
        let mut capped = false;

        let (profile, origin) = match self.provider.open(state.category()) {
            Err(err) => {
                warn!("{err}; using default letter order");
                (
                    FrequencyProfile::fallback(default_order),
                    ProfileOrigin::Unavailable(err.to_string()),
                )
            }
            Ok(store) => match store.frequency_profile(length) {
                Ok(Some(profile)) => {
                    let masks = MaskConstraint::build(pattern, state.missed(), &profile);
                    debug!(
                        "masks for {pattern}: have {:#b}, lack {:#b}",
                        masks.must_have, masks.must_lack
                    );
                    let query = CandidateQuery::new(pattern, masks);
                    let filter = PatternFilter::new(pattern, state.missed());
                    let retrieval = pager::retrieve(&*store, &query, &filter, self.config.pager);

                    candidates = retrieval.candidates;
                    pages = retrieval.pages;
                    failed_pages = retrieval.failed_pages;
                    capped = retrieval.capped;
                    (profile, ProfileOrigin::Learned)
                }
                Ok(None) => (
                    FrequencyProfile::fallback(default_order),
                    ProfileOrigin::NoProfile,
                ),
                Err(err) => {
                    warn!("profile lookup for length {length} failed: {err}");
                    (
                        FrequencyProfile::fallback(default_order),
                        ProfileOrigin::Unavailable(err.to_string()),
                    )
                }
            },
        };

        let fallback =
            selector::undetermined_letters(profile.full_order(), pattern, state.missed());
        let guesses = selector::select(
            &candidates,
            &fallback,
            pattern,
            state.missed(),
            state.remaining() as usize,
        );

        let report = RoundReport {
            origin,
            length,
            fallback,
            preview: candidates
                .iter()
                .take(RoundReport::preview_len(length))
                .cloned()
                .collect(),
            candidate_count: candidates.len(),
            pages,
            failed_pages,
            capped,
            elapsed: started.elapsed(),
        };

        info!(
            "{} {pattern} ({}): {} candidates, guesses {:?} / {:?}",
            state.player(),
            state.category(),
            report.candidate_count,
            guesses.conservative,
            guesses.aggressive
        );

        (guesses, report)
    }

    /// Current guess of the given kind
    ///
    /// `None` when disabled, when no round is live, or when the guess is empty.
    #[must_use]
    pub fn request_guess(&self, kind: GuessKind) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        let guess = self.round.as_ref()?.guesses.get(kind);
        (!guess.is_empty()).then_some(guess)
    }

    /// Message text that submits a guess to the round's player
    ///
    /// `suffix` is the nick-completion suffix, typically `:` or `,`.
    #[must_use]
    pub fn outgoing(&self, kind: GuessKind, suffix: &str) -> Option<String> {
        let guess = self.request_guess(kind)?;
        let player = self.round.as_ref()?.state.player();
        Some(format!("{player}{suffix} {guess}"))
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref().map(|r| &r.state)
    }

    #[must_use]
    pub fn guesses(&self) -> Option<&GuessPair> {
        self.round.as_ref().map(|r| &r.guesses)
    }

    #[must_use]
    pub fn report(&self) -> Option<&RoundReport> {
        self.round.as_ref().map(|r| &r.report)
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the enable switch, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CandidateQuery, MemoryCatalog, MemoryStore, StoreError, WordStore};
    use std::cell::Cell;

    const ANIMALS: &[&str] = &[
        "snake", "camel", "horse", "tiger", "zebra", "moose", "llama", "koala", "panda", "sheep",
        "hyena", "otter", "eagle", "mouse", "whale",
    ];

    fn catalog() -> MemoryCatalog {
        let animals = MemoryStore::new()
            .with_profile(5, FrequencyProfile::learned("eaoirtlnsc", None, 6))
            .with_words(ANIMALS.iter().copied());
        let fruit = MemoryStore::new()
            .with_profile(5, FrequencyProfile::learned("eaplmnorst", None, 6))
            .with_words(["apple", "mango", "lemon", "melon", "grape"]);
        MemoryCatalog::new()
            .with("animals", animals)
            .with("fruit", fruit)
    }

    fn engine() -> Engine<MemoryCatalog> {
        Engine::new(catalog(), EngineConfig::default())
    }

    #[test]
    fn unique_candidate_fills_both_guesses() {
        let mut engine = engine();
        let report = engine.ingest("bot", "␣pp␣␣ [] 0/6 (fruit)").unwrap();
        assert_eq!(report.origin, ProfileOrigin::Learned);
        assert_eq!(report.candidate_count, 1);
        assert_eq!(report.preview, vec!["apple"]);

        assert_eq!(engine.request_guess(GuessKind::Conservative), Some("ale"));
        assert_eq!(engine.request_guess(GuessKind::Aggressive), Some("ale"));
    }

    #[test]
    fn two_candidates_fork_guesses() {
        let mut engine = engine();
        // melon / lemon
        engine.ingest("bot", "␣e␣o␣ [] 0/6 (fruit)").unwrap();
        let pair = engine.guesses().unwrap();
        assert_eq!(pair.conservative, "lmn");
        assert_eq!(pair.aggressive, "mln");
    }

    #[test]
    fn many_candidates_use_learned_order() {
        let mut engine = engine();
        let report = engine.ingest("bot", "␣␣␣␣␣ [] 1/6 (animals)").unwrap();
        assert!(report.candidate_count > 2);
        assert_eq!(report.preview.len(), 5);
        assert_eq!(report.fallback, "eaoirtlnsc");

        let pair = engine.guesses().unwrap();
        assert_eq!(pair.conservative, "eao");
        assert_eq!(pair.aggressive, "eaoir");
    }

    #[test]
    fn unique_candidate_beyond_budget_keeps_every_letter() {
        let animals = MemoryStore::new()
            .with_profile(8, FrequencyProfile::learned("eaoirtlnsc", None, 6))
            .with_words(["elephant"]);
        let mut engine = Engine::new(
            MemoryCatalog::new().with("animals", animals),
            EngineConfig::default(),
        );

        let report = engine.ingest("bot", "␣␣␣␣␣␣␣␣ [] 4/6 (animals)").unwrap();
        assert_eq!(report.candidate_count, 1);
        assert_eq!(engine.request_guess(GuessKind::Conservative), Some("elphant"));
        assert_eq!(engine.request_guess(GuessKind::Aggressive), Some("elphant"));
    }

    #[test]
    fn missed_letters_narrow_candidates() {
        let mut engine = engine();
        let report = engine.ingest("bot", "␣a␣␣e [xyz] 1/6 (animals)").unwrap();
        assert_eq!(report.preview, vec!["eagle"]);
        assert_eq!(engine.request_guess(GuessKind::Aggressive), Some("gl"));
    }

    #[test]
    fn unknown_category_falls_back_to_default_order() {
        let mut engine = engine();
        let report = engine
            .ingest("bot", "␣a␣␣e [xyz] 1/6 (planets)")
            .unwrap()
            .clone();
        assert!(matches!(report.origin, ProfileOrigin::Unavailable(_)));
        assert_eq!(report.candidate_count, 0);
        assert_eq!(report.pages, 0);
        assert_eq!(report.fallback, "toinsrhdlucmfwgpbvkqj");

        let pair = engine.guesses().unwrap();
        assert_eq!(pair.conservative, "toi");
        assert_eq!(pair.aggressive, "toins");
    }

    #[test]
    fn missing_length_row_falls_back() {
        let mut engine = engine();
        let report = engine.ingest("bot", "␣␣␣ [] 0/4 (animals)").unwrap();
        assert_eq!(report.origin, ProfileOrigin::NoProfile);
        assert_eq!(engine.request_guess(GuessKind::Aggressive), Some("etao"));
    }

    #[test]
    fn category_default_override() {
        let mut config = EngineConfig::default();
        config
            .category_defaults
            .insert("planets".to_string(), "uarnte".to_string());
        let mut engine = Engine::new(catalog(), config);

        engine.ingest("bot", "␣␣␣␣␣ [] 2/6 (planets)").unwrap();
        assert_eq!(engine.request_guess(GuessKind::Conservative), Some("ua"));
    }

    #[test]
    fn non_matching_message_keeps_round() {
        let mut engine = engine();
        engine.ingest("bot", "␣pp␣␣ [] 0/6 (fruit)").unwrap();
        assert!(engine.ingest("alice", "anyone up for a game?").is_none());
        assert_eq!(engine.round().unwrap().category(), "fruit");
    }

    #[test]
    fn new_round_supersedes_old() {
        let mut engine = engine();
        engine.ingest("bot", "␣pp␣␣ [] 0/6 (fruit)").unwrap();
        engine.ingest("otherbot", "␣␣␣␣␣ [] 0/6 (animals)").unwrap();

        assert_eq!(engine.round().unwrap().player(), "otherbot");
        assert_eq!(engine.request_guess(GuessKind::Conservative), Some("eao"));
    }

    #[test]
    fn no_round_means_no_guess() {
        let engine = engine();
        assert!(engine.request_guess(GuessKind::Conservative).is_none());
        assert!(engine.outgoing(GuessKind::Aggressive, ":").is_none());
    }

    #[test]
    fn empty_guess_is_none() {
        let mut engine = engine();
        engine.ingest("bot", "␣␣␣␣␣ [] 6/6 (animals)").unwrap();
        assert!(engine.request_guess(GuessKind::Aggressive).is_none());
    }

    #[test]
    fn disabled_engine_ignores_everything() {
        let mut engine = engine();
        engine.ingest("bot", "␣pp␣␣ [] 0/6 (fruit)").unwrap();
        assert!(!engine.toggle());

        assert!(engine.request_guess(GuessKind::Aggressive).is_none());
        assert!(engine.ingest("bot", "␣␣␣␣␣ [] 0/6 (animals)").is_none());

        engine.set_enabled(true);
        assert_eq!(engine.round().unwrap().category(), "fruit");
        assert_eq!(engine.request_guess(GuessKind::Aggressive), Some("ale"));
    }

    #[test]
    fn outgoing_addresses_player() {
        let mut engine = engine();
        engine
            .ingest_line("HangBot ␣pp␣␣ [] 0/6 (fruit)")
            .unwrap();
        assert_eq!(
            engine.outgoing(GuessKind::Conservative, ",").as_deref(),
            Some("HangBot, ale")
        );
    }

    #[test]
    fn solve_is_deterministic() {
        let engine = engine();
        let parser = RoundParser::default();
        let state = parser.parse("bot", "␣␣␣␣␣ [s] 2/7 (animals)").unwrap();

        let (first, report_a) = engine.solve(&state);
        let (second, report_b) = engine.solve(&state);
        assert_eq!(first, second);
        assert_eq!(report_a.preview, report_b.preview);
    }

    #[test]
    fn long_words_get_short_preview() {
        assert_eq!(RoundReport::preview_len(11), 3);
        assert_eq!(RoundReport::preview_len(10), 5);
    }

    struct BrokenProvider;

    struct BrokenStore;

    impl WordStore for BrokenStore {
        fn frequency_profile(
            &self,
            _length: usize,
        ) -> Result<Option<FrequencyProfile>, StoreError> {
            Err(StoreError::Query("table missing".to_string()))
        }

        fn words_page(
            &self,
            _query: &CandidateQuery<'_>,
            _offset: usize,
            _limit: usize,
        ) -> Result<Vec<String>, StoreError> {
            Err(StoreError::Query("table missing".to_string()))
        }
    }

    impl StoreProvider for BrokenProvider {
        fn open(&self, _category: &str) -> Result<Box<dyn WordStore + '_>, StoreError> {
            Ok(Box::new(BrokenStore))
        }
    }

    #[test]
    fn broken_store_degrades_to_default() {
        let mut engine = Engine::new(BrokenProvider, EngineConfig::default());
        let report = engine.ingest("bot", "␣␣␣ [e] 0/2 (anything)").unwrap();
        assert!(matches!(report.origin, ProfileOrigin::Unavailable(_)));
        assert_eq!(engine.request_guess(GuessKind::Aggressive), Some("ta"));
    }

    struct FlakyProvider {
        store: MemoryStore,
        calls: Cell<usize>,
    }

    impl WordStore for FlakyProvider {
        fn frequency_profile(
            &self,
            length: usize,
        ) -> Result<Option<FrequencyProfile>, StoreError> {
            self.store.frequency_profile(length)
        }

        fn words_page(
            &self,
            query: &CandidateQuery<'_>,
            offset: usize,
            limit: usize,
        ) -> Result<Vec<String>, StoreError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if call == 1 {
                return Err(StoreError::Query("locked".to_string()));
            }
            self.store.words_page(query, offset, limit)
        }
    }

    impl StoreProvider for FlakyProvider {
        fn open(&self, _category: &str) -> Result<Box<dyn WordStore + '_>, StoreError> {
            Ok(Box::new(self))
        }
    }

    #[test]
    fn failed_page_reported() {
        let store = MemoryStore::new()
            .with_profile(5, FrequencyProfile::learned("eaoirtlnsc", None, 6))
            .with_words(ANIMALS.iter().copied());
        let config = EngineConfig {
            pager: PagerConfig::new(2, 100),
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(
            FlakyProvider {
                store,
                calls: Cell::new(0),
            },
            config,
        );

        let report = engine.ingest("bot", "␣␣␣␣␣ [] 0/6 (animals)").unwrap();
        assert_eq!(report.failed_pages, 1);
        assert_eq!(report.candidate_count, 2);
        assert!(!report.capped);
    }
}
