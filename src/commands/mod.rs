//! Command implementations
//!
//! Entry points behind each CLI subcommand, kept out of `main` so they can be tested.

pub mod simple;
pub mod step;
pub mod words;

pub use simple::run_simple;
pub use step::{StepConfig, parse_key, run_step, step_session};
pub use words::{random_word, validate_word};
