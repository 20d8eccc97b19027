//! Word lists and the word source used by games
//!
//! Provides embedded word lists compiled into the binary and the
//! validator/random-word capabilities built on top of them.

pub mod loader;
mod source;

// `ANSWERS`, `ALLOWED` and their counts, generated by build.rs from data/
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

pub use source::{FnValidator, ValidationError, WordBank, WordListError, WordSource, WordValidator};
