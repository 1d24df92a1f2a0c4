//! Candidate filtering and guess selection
//!
//! Leaves first: bitmask constraints, positional refinement, paged
//! retrieval, guess budgeting, and the engine that ties them together.

mod engine;
pub mod filter;
pub mod mask;
pub mod pager;
pub mod selector;

pub use engine::{Engine, EngineConfig, ProfileOrigin, RoundReport};
pub use filter::PatternFilter;
pub use mask::MaskConstraint;
pub use pager::{PagerConfig, Retrieval};
pub use selector::{GuessKind, GuessPair};
