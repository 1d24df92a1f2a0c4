//! Command implementations

pub mod suggest;
pub mod toggle;
pub mod watch;

pub use suggest::suggest_round;
pub use toggle::run_toggle;
pub use watch::{LineOutcome, WatchConfig, handle_line, run_watch};
