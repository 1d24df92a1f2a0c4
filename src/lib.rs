//! HangTite
//!
//! A hangman guess assistant for channel word games. It narrows a dictionary
//! with letter-presence bitmasks and positional matching, then proposes a
//! conservative and an aggressive letter guess for the remaining budget.
//!
//! # Quick Start
//!
//! ```rust
//! use hangtite::core::FrequencyProfile;
//! use hangtite::solver::{Engine, EngineConfig, GuessKind};
//! use hangtite::store::{MemoryCatalog, MemoryStore};
//!
//! let animals = MemoryStore::new()
//!     .with_profile(5, FrequencyProfile::learned("eaoirtlnsc", None, 6))
//!     .with_words(["eagle", "camel", "tiger"]);
//! let mut engine = Engine::new(
//!     MemoryCatalog::new().with("animals", animals),
//!     EngineConfig::default(),
//! );
//!
//! engine.ingest("GameBot", "␣a␣␣e [xyz] 1/6 (animals)");
//! assert_eq!(engine.request_guess(GuessKind::Aggressive), Some("gl"));
//! ```

// Core domain types
pub mod core;

// Candidate filtering and guess selection
pub mod solver;

// Word and frequency stores
pub mod store;

// Persisted enable switch
pub mod settings;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
