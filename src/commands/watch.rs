//! Channel watch mode
//!
//! Reads `<sender> <message>` lines, solves every round announcement, and
//! answers the guess keys:
//! - `/f2` emits the conservative guess
//! - `/f3` emits the aggressive guess
//! - `/hangtite` toggles the assistant and persists the switch

use crate::output::{print_guess_summary, print_notice, print_report};
use crate::settings::Settings;
use crate::solver::{Engine, GuessKind};
use crate::store::StoreProvider;
use anyhow::Result;
use log::debug;
use std::io::BufRead;
use std::path::PathBuf;

/// Settings for watch mode
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Appended to the player's nick when addressing a guess
    pub completion_suffix: String,
    /// Where the enable switch is persisted, if anywhere
    pub settings_path: Option<PathBuf>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            completion_suffix: ":".to_string(),
            settings_path: None,
        }
    }
}

/// What one input line did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A new round was solved
    Round,
    /// A guess key produced a message to send
    Say(String),
    /// A guess key was pressed but there is nothing to send
    NothingToSay,
    /// The enable switch changed to the given state
    Toggled(bool),
    /// Not a command and not a round announcement
    Ignored,
}

/// Apply one input line to the engine
pub fn handle_line<P: StoreProvider>(
    engine: &mut Engine<P>,
    line: &str,
    config: &WatchConfig,
) -> LineOutcome {
    let key = match line.trim() {
        "/f2" => GuessKind::Conservative,
        "/f3" => GuessKind::Aggressive,
        "/hangtite" => return LineOutcome::Toggled(engine.toggle()),
        _ => {
            return match engine.ingest_line(line) {
                Some(_) => LineOutcome::Round,
                None => LineOutcome::Ignored,
            };
        }
    };

    engine
        .outgoing(key, &config.completion_suffix)
        .map_or(LineOutcome::NothingToSay, LineOutcome::Say)
}

/// Run watch mode until the input ends
///
/// # Errors
///
/// Returns an error if reading input fails or the enable switch cannot be
/// saved.
pub fn run_watch<P: StoreProvider, R: BufRead>(
    engine: &mut Engine<P>,
    input: R,
    config: &WatchConfig,
) -> Result<()> {
    print_notice(&format!("HangTite loaded.  Enabled: {}", engine.enabled()));

    for line in input.lines() {
        let line = line?;
        match handle_line(engine, &line, config) {
            LineOutcome::Round => {
                if let (Some(report), Some(round), Some(guesses)) =
                    (engine.report(), engine.round(), engine.guesses())
                {
                    print_report(report);
                    print_guess_summary(round.player(), guesses);
                }
            }
            LineOutcome::Say(text) => println!("SAY {text}"),
            LineOutcome::NothingToSay => debug!("no guess to send"),
            LineOutcome::Toggled(enabled) => {
                print_notice(&format!("HangTite enabled: {enabled}"));
                if let Some(path) = &config.settings_path {
                    Settings { enabled }.save(path)?;
                }
            }
            LineOutcome::Ignored => {}
        }
    }

    Ok(())
}
