//! Compiles the word lists in `data/` into constants
//!
//! `answers.rs` holds the answer bank. `allowed.rs` holds every accepted guess:
//! the answer bank plus `data/allowed.txt`, sorted and deduplicated.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const ANSWERS_FILE: &str = "data/answers.txt";
const EXTRA_FILE: &str = "data/allowed.txt";

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    let answers = load(ANSWERS_FILE);
    let mut allowed: Vec<String> = answers.iter().cloned().chain(load(EXTRA_FILE)).collect();
    allowed.sort_unstable();
    allowed.dedup();

    emit(&out_dir.join("answers.rs"), "ANSWERS", "Answer bank words drawn for new games", &answers);
    emit(&out_dir.join("allowed.rs"), "ALLOWED", "Words accepted as guesses, answers included", &allowed);

    for file in [ANSWERS_FILE, EXTRA_FILE] {
        println!("cargo:rerun-if-changed={file}");
    }
}

fn load(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {path}: {e}"))
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn emit(path: &Path, name: &str, doc: &str, words: &[String]) {
    let mut src = format!("/// {doc} ({} words)\npub const {name}: &[&str] = &[\n", words.len());
    for word in words {
        let _ = writeln!(src, "    {word:?},");
    }
    let _ = writeln!(src, "];\n\n/// Number of entries in [`{name}`]");
    let _ = writeln!(src, "pub const {name}_COUNT: usize = {};", words.len());

    fs::write(path, src).unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
}
