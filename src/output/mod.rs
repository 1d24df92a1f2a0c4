//! Terminal output formatting
//!
//! Display utilities for round reports and guess lines.

pub mod display;
pub mod formatters;

pub use display::{print_guess_summary, print_notice, print_report};
