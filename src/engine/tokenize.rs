// Overview tokenization.
//
// Lowercase, split on anything that isn't alphanumeric, drop English stop
// words. The stop word list comes from the stop-words crate so the set of
// excluded function words stays consistent with published lists rather
// than a hand-picked one.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            stop_words: get(LANGUAGE::English).into_iter().collect(),
        }
    }
}

impl Tokenizer {
    /// Split `text` into lowercase content-word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }
}
