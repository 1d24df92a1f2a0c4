//! Formatting utilities for terminal output

use crate::solver::{GuessPair, ProfileOrigin, RoundReport};

/// Join the candidate preview the way the status line shows it
#[must_use]
pub fn candidate_preview(report: &RoundReport) -> String {
    report.preview.join(" | ")
}

/// One-line summary of where the letter order came from
#[must_use]
pub fn origin_line(report: &RoundReport) -> String {
    match &report.origin {
        ProfileOrigin::Learned => format!("Stats: {} ({})", report.fallback, report.length),
        ProfileOrigin::NoProfile => format!("Default: {} (no stats)", report.fallback),
        ProfileOrigin::Unavailable(reason) => format!("Default: {} ({reason})", report.fallback),
    }
}

/// Warning for a candidate list that may be incomplete
#[must_use]
pub fn retrieval_warning(report: &RoundReport) -> Option<String> {
    let mut notes = Vec::new();
    if report.failed_pages > 0 {
        notes.push(format!("{} of {} pages failed", report.failed_pages, report.pages));
    }
    if report.capped {
        notes.push(format!("stopped after {} pages", report.pages));
    }
    (!notes.is_empty()).then(|| format!("{}; candidate list is partial", notes.join(", ")))
}

/// Key hints for both guesses, skipping empty ones
///
/// Returns `None` when neither guess has letters.
#[must_use]
pub fn guess_hints(player: &str, guesses: &GuessPair) -> Option<String> {
    let hints: Vec<String> = [("F2", &guesses.conservative), ("F3", &guesses.aggressive)]
        .into_iter()
        .filter(|(_, guess)| !guess.is_empty())
        .map(|(key, guess)| format!("{key}: {player}: {guess}"))
        .collect();

    (!hints.is_empty()).then(|| hints.join(" | "))
}
