//! HangTite - CLI
//!
//! Watches hangman round announcements and suggests letter guesses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangtite::{
    commands::{WatchConfig, run_toggle, run_watch, suggest_round},
    output::print_notice,
    settings::Settings,
    solver::{Engine, EngineConfig, PagerConfig},
    store::CategoryDir,
};
use log::debug;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangtite",
    about = "Hangman guess assistant using per-category letter statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding one <category>.json store per category
    #[arg(short, long, global = true, default_value = "hangtite")]
    db_dir: PathBuf,

    /// Words fetched per store page
    #[arg(long, global = true, default_value_t = hangtite::solver::pager::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Maximum pages fetched for one round
    #[arg(long, global = true, default_value_t = hangtite::solver::pager::DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Suffix appended to the player's nick when sending a guess
    #[arg(long, global = true, default_value = ":")]
    completion_suffix: String,

    /// Settings file holding the enable switch
    #[arg(long, global = true, default_value = "hangtite/settings.json")]
    settings: PathBuf,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read channel lines from stdin (default)
    Watch,

    /// Solve a single status line
    Suggest {
        /// Nick that posted the status line
        sender: String,

        /// The status line, e.g. "␣a␣␣e [xyz] 1/6 (animals)"
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Flip the persisted enable switch
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = EngineConfig {
        pager: PagerConfig::new(cli.page_size, cli.max_pages),
        ..EngineConfig::default()
    };
    debug!("store directory {}", cli.db_dir.display());

    match cli.command.unwrap_or(Commands::Watch) {
        Commands::Watch => {
            let settings = Settings::load(&cli.settings)?;
            let mut engine = Engine::new(CategoryDir::new(&cli.db_dir), config);
            engine.set_enabled(settings.enabled);

            let watch = WatchConfig {
                completion_suffix: cli.completion_suffix,
                settings_path: Some(cli.settings),
            };
            run_watch(&mut engine, io::stdin().lock(), &watch)
        }
        Commands::Suggest { sender, message } => {
            let mut engine = Engine::new(CategoryDir::new(&cli.db_dir), config);
            suggest_round(&mut engine, &sender, &message.join(" "))
                .map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Commands::Toggle => {
            let enabled = run_toggle(&cli.settings)?;
            print_notice(&format!("HangTite enabled: {enabled}"));
            Ok(())
        }
    }
}
