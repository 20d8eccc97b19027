//! Display functions for boards and command results

use super::formatters::{cell_tile, create_progress_bar, key_tile, status_banner};
use crate::game::{FinishedState, Grid, KeyCap};
use crate::session::SessionView;
use colored::Colorize;
use std::fmt::Write;

/// Render the board rows, one line per row
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid {
        for cell in row {
            let _ = write!(out, "{}", cell_tile(cell));
        }
        out.push('\n');
    }
    out
}

/// Render the keyboard, indenting lower rows like a physical keyboard
#[must_use]
pub fn render_keyboard(keyboard: &[Vec<KeyCap>]) -> String {
    let mut out = String::new();
    for (i, row) in keyboard.iter().enumerate() {
        out.push_str(&" ".repeat(i * 2));
        for key in row {
            let _ = write!(out, "{}", key_tile(key));
        }
        out.push('\n');
    }
    out
}

/// Print the board, keyboard and status of a session request
pub fn print_session_view(view: &SessionView) {
    println!("\n{}", "─".repeat(40).cyan());

    if let Some(banner) = status_banner(view.finished, view.invalid_submit) {
        let banner = match view.finished {
            Some(FinishedState::Won) => banner.green().bold(),
            _ => banner.red().bold(),
        };
        println!("{banner}\n");
    }

    print!("{}", render_grid(&view.grid));
    println!();
    print!("{}", render_keyboard(&view.keyboard));

    if let Some(answer) = &view.answer {
        println!("\nAnswer: {}", answer.bright_yellow().bold());
    }
    if let Some(share) = &view.share_text {
        println!("\n{share}");
    }

    println!("{}", "─".repeat(40).cyan());
}

/// Print a guess distribution histogram, rows 1 through 6
pub fn print_distribution(distribution: &[usize]) {
    let max = distribution.iter().copied().max().unwrap_or(0) as f64;

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max, 30);
        println!("   {guesses}: {} {count:4}", bar.green());
    }
}
