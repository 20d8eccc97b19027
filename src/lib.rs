//! Wordle Game
//!
//! A Wordle game engine with pluggable word validation, snapshot persistence,
//! per-session request handling and terminal front-ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordle_game::core::{LetterState, Word};
//! use wordle_game::game::Game;
//! use wordle_game::wordlists::WordBank;
//!
//! # async fn demo() {
//! let mut game = Game::new(Arc::new(WordBank::embedded()));
//! game.initialize(Word::new("crane").unwrap());
//!
//! for letter in "slate".chars() {
//!     game.add_letter(letter);
//! }
//! game.submit().await;
//!
//! assert_eq!(game.keyboard_letter_state('A'), Some(LetterState::Correct));
//! let saved = game.encode();
//! # }
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Persisted sessions
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
