//! Wordle Game - CLI
//!
//! Play Wordle in a TUI, a line-based prompt, or one step at a time against
//! a game saved on disk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{StepConfig, parse_key, random_word, run_simple, run_step, validate_word},
    game::EngineConfig,
    session::Action,
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle with a terminal UI, a simple prompt mode and persisted sessions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file used for answers and guesses
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Give up on word validation after this many milliseconds
    #[arg(short, long, global = true, default_value = "2000")]
    timeout_ms: u64,

    /// Append logs to this file (the TUI logs nothing without it)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,

    /// Apply one action to a saved game and print the board
    Step {
        /// Directory holding saved sessions
        #[arg(long, default_value = ".wordle")]
        store: PathBuf,

        /// Session name: letters, digits, '-' and '_'
        #[arg(short, long, default_value = "default")]
        session: String,

        #[command(subcommand)]
        action: StepAction,
    },

    /// Check whether a word is an allowed guess
    Validate {
        /// Word to check
        word: String,
    },

    /// Print a random answer word
    Random,
}

#[derive(Subcommand, Clone)]
enum StepAction {
    /// Type a letter
    Key { letter: String },
    /// Delete the last letter
    Backspace,
    /// Submit the current row
    Submit,
    /// Start over with a new answer
    New,
    /// Show the board
    View,
}

impl StepAction {
    fn to_action(&self) -> Result<Action> {
        Ok(match self {
            Self::Key { letter } => Action::PressKey(
                parse_key(letter)
                    .with_context(|| format!("'{letter}' is not a single letter"))?,
            ),
            Self::Backspace => Action::Backspace,
            Self::Submit => Action::Submit,
            Self::New => Action::NewGame,
            Self::View => Action::View,
        })
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` overrides the default `warn` level. The TUI owns the terminal,
/// so it only logs when a log file is given.
fn setup_logging(log_file: Option<&PathBuf>, interactive: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Load the word bank based on the -w flag
async fn load_words(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "embedded" => Ok(WordBank::embedded()),
        path => WordBank::from_file(path)
            .await
            .with_context(|| format!("loading word list {path}")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    setup_logging(cli.log_file.as_ref(), matches!(command, Commands::Play))?;

    let words = Arc::new(load_words(&cli.wordlist).await?);
    let config = EngineConfig::default().with_validation_timeout(Duration::from_millis(cli.timeout_ms));
    tracing::debug!(
        answers = words.answer_count(),
        allowed = words.allowed_count(),
        "word bank loaded"
    );

    match command {
        Commands::Play => run_play_command(words, config).await,
        Commands::Simple => run_simple(words, config)
            .await
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Step {
            store,
            session,
            action,
        } => {
            let step = StepConfig {
                store_dir: store,
                session,
                engine: config,
            };
            run_step(&step, words, action.to_action()?)
                .await
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Validate { word } => {
            println!("{}", validate_word(&words, &word).await);
            Ok(())
        }
        Commands::Random => {
            println!("{}", random_word(&words));
            Ok(())
        }
    }
}

async fn run_play_command(words: Arc<WordBank>, config: EngineConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, config);
    run_tui(app).await
}
