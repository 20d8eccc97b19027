//! Word list queries printed as JSON

use crate::wordlists::{WordBank, WordSource, WordValidator};
use serde_json::{Value, json};

/// Check a candidate guess against the word bank
pub async fn validate_word(words: &WordBank, word: &str) -> Value {
    match words.validate_word(word).await {
        Ok(valid) => json!({ "word": word.to_uppercase(), "valid": valid }),
        Err(e) => json!({ "word": word.to_uppercase(), "valid": false, "error": e.to_string() }),
    }
}

/// Draw a random answer from the word bank
#[must_use]
pub fn random_word(words: &WordBank) -> Value {
    json!({ "word": words.random_word().text() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[tokio::test]
    async fn validate_reports_membership() {
        let words = WordBank::embedded();
        assert_eq!(
            validate_word(&words, "crane").await,
            json!({ "word": "CRANE", "valid": true })
        );
        assert_eq!(validate_word(&words, "zzzzz").await["valid"], json!(false));
        assert_eq!(validate_word(&words, "cra").await["valid"], json!(false));
    }

    #[test]
    fn random_comes_from_answers() {
        let words = WordBank::new(words_from_slice(&["ghost"]), &[]).unwrap();
        assert_eq!(random_word(&words), json!({ "word": "GHOST" }));
    }
}
