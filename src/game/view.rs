//! Read-only projections of a game for renderers

use crate::core::{HEIGHT, LetterState, WIDTH};
use serde::Serialize;

/// Physical keyboard rows used by the keyboard projection
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub state: LetterState,
}

impl Cell {
    pub(crate) const BLANK: Self = Self {
        letter: None,
        state: LetterState::Unanswered,
    };
}

/// Full board, `HEIGHT` rows of `WIDTH` cells
pub type Grid = [[Cell; WIDTH]; HEIGHT];

/// One keyboard key; `state` is `None` until the letter has been played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyCap {
    pub letter: char,
    pub state: Option<LetterState>,
}
