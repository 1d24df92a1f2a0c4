//! Display functions for round results

use super::formatters::{candidate_preview, guess_hints, origin_line, retrieval_warning};
use crate::solver::{GuessPair, ProfileOrigin, RoundReport};
use colored::Colorize;

/// Print a notice line in the assistant's colors
pub fn print_notice(text: &str) {
    println!("{}", format!(" {text} ").bright_green().on_black());
}

/// Print the diagnostics of a solved round
pub fn print_report(report: &RoundReport) {
    print_notice(&origin_line(report));

    if report.origin == ProfileOrigin::Learned {
        print_notice(&format!(
            "{} ({} returned, {:.4} s)",
            candidate_preview(report),
            report.candidate_count,
            report.elapsed.as_secs_f64()
        ));
        if let Some(warning) = retrieval_warning(report) {
            println!("{}", warning.yellow());
        }
    }
}

/// Print the key hints for both guesses
pub fn print_guess_summary(player: &str, guesses: &GuessPair) {
    if let Some(hints) = guess_hints(player, guesses) {
        print_notice(&hints);
    }
}
