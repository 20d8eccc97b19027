//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::game::{EngineConfig, FinishedState, Game, SubmitOutcome};
use crate::output::{print_distribution, render_grid, render_keyboard};
use crate::wordlists::{WordBank, WordSource};
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    Quit,
    NewGame,
    Guess(String),
}

impl PromptInput {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            other => Self::Guess(other.to_string()),
        }
    }
}

/// Replace the active row with `word` and submit it
pub async fn play_guess(game: &mut Game, word: &str) -> SubmitOutcome {
    while !game.current_input().is_empty() {
        game.backspace();
    }
    for letter in word.chars() {
        game.add_letter(letter);
    }
    game.submit().await
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple(words: Arc<WordBank>, config: EngineConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in 6 tries.");
    println!("  - {} letter is in the right spot", " A ".black().on_green());
    println!("  - {} letter is in the word", " A ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " A ".bright_black());
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut game = Game::with_config(words.clone(), config);
    game.initialize(words.random_word());
    let mut distribution = [0usize; 7];

    loop {
        print!("{}", render_grid(&game.grid()));
        println!();
        print!("{}", render_keyboard(&game.keyboard()));
        println!();

        let input = match PromptInput::parse(&get_user_input("Guess")?) {
            PromptInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PromptInput::NewGame => {
                game.initialize(words.random_word());
                println!("\n🔄 New game started!\n");
                continue;
            }
            PromptInput::Guess(word) => word,
        };

        match play_guess(&mut game, &input).await {
            SubmitOutcome::Ignored => println!("❌ Guesses must be exactly 5 letters\n"),
            SubmitOutcome::Rejected => println!("❌ Word not in word list\n"),
            SubmitOutcome::Accepted => {}
        }

        let Some(finished) = game.finished_state() else {
            continue;
        };

        print!("{}", render_grid(&game.grid()));
        let answer = game
            .answer()
            .map(|w| w.text().to_string())
            .unwrap_or_default();

        println!("\n{}", "═".repeat(70).bright_cyan());
        match finished {
            FinishedState::Won => {
                distribution[game.current_row()] += 1;
                println!(
                    "{}",
                    "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                        .bright_green()
                        .bold()
                );
            }
            FinishedState::Lost => {
                println!(
                    "    The word was {}",
                    answer.bright_yellow().bold()
                );
            }
        }
        println!("{}", "═".repeat(70).bright_cyan());

        if let Some(share) = game.share_text() {
            println!("\n{share}");
        }
        print_distribution(&distribution);
        println!();

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                game.initialize(words.random_word());
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
