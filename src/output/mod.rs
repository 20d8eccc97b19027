//! Terminal output formatting
//!
//! Display utilities for boards, keyboards and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_distribution, print_session_view, render_grid, render_keyboard};
