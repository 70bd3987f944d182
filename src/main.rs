//! Word Scramble - CLI
//!
//! Spell as many words as you can from a random root word, in a TUI or a
//! plain line-based mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_word, run_simple},
    dictionary::{DEFAULT_LANGUAGE, Dictionary},
    output::print_check_result,
    session::{GameSession, HistoryPolicy, SessionConfig},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Dictionary file, one word per line (default: built-in English dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language code passed to the spell checker
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Store submissions exactly as typed instead of lowercased and trimmed
    #[arg(long, global = true)]
    raw_history: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check whether a word can be made from a root word
    Check {
        /// The root word to spell from
        root: String,

        /// The word to check
        word: String,
    },
}

/// Initialize logging to stderr, filtered by `RUST_LOG`
///
/// The TUI owns the terminal, so it logs nothing unless asked to.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the spell checker selected by `--dictionary` and `--language`
fn load_dictionary(path: Option<&PathBuf>, language: &str) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::load(path, language)
            .with_context(|| format!("Failed to load dictionary {}", path.display())),
        None if language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) => Ok(Dictionary::embedded()),
        None => bail!(
            "The built-in dictionary only covers '{DEFAULT_LANGUAGE}'; \
             pass --dictionary for '{language}'"
        ),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(match command {
        Commands::Play => "off",
        Commands::Simple | Commands::Check { .. } => "warn",
    });

    let dictionary = load_dictionary(cli.dictionary.as_ref(), &cli.language)?;

    match command {
        Commands::Check { root, word } => {
            let result = check_word(&root, &word, &dictionary, &cli.language)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(if result.is_accepted() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Simple => {
            let session = start_session(cli.words, cli.language, cli.raw_history, dictionary)?;
            run_simple_command(session)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Play => {
            let session = start_session(cli.words, cli.language, cli.raw_history, dictionary)?;
            run_play_command(session)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Build the session and pick the first root word
fn start_session(
    words: Option<PathBuf>,
    language: String,
    raw_history: bool,
    dictionary: Dictionary,
) -> Result<GameSession<Dictionary>> {
    let source = words.map_or(WordSource::Embedded, WordSource::File);
    let config = SessionConfig {
        language,
        history: if raw_history {
            HistoryPolicy::Raw
        } else {
            HistoryPolicy::Normalized
        },
    };

    GameSession::new(source.clone(), dictionary, config)
        .with_context(|| format!("Could not start a round from {source}"))
}

fn run_simple_command(mut session: GameSession<Dictionary>) -> Result<()> {
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(session: GameSession<Dictionary>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
