//! Interactive terminal game
//!
//! A ratatui front-end that drives a single [`Game`](crate::game::Game).

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
