//! One-shot round analysis
//!
//! Solves a single status line and prints the report and both guesses.

use crate::output::{print_guess_summary, print_report};
use crate::solver::{Engine, GuessPair};
use crate::store::StoreProvider;

/// Solve one status line posted by `sender`
///
/// # Errors
///
/// Returns an error if the engine is disabled or the message is not a round
/// announcement.
pub fn suggest_round<P: StoreProvider>(
    engine: &mut Engine<P>,
    sender: &str,
    message: &str,
) -> Result<GuessPair, String> {
    if !engine.enabled() {
        return Err("assistant is disabled".to_string());
    }

    let report = engine
        .ingest(sender, message)
        .ok_or_else(|| format!("not a round announcement: {message}"))?;
    print_report(report);

    let guesses = engine.guesses().cloned().unwrap_or_default();
    print_guess_summary(sender, &guesses);
    Ok(guesses)
}
