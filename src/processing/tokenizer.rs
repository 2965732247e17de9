//! Word tokenization for free-text input

use crate::error::{CareerMatcherError, Result};
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into lowercase word tokens with punctuation removed.
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
    strip_regex: Regex,
}

/// Per-call filtering applied on top of plain tokenization.
#[derive(Debug, Clone, Copy)]
pub struct TokenFilter {
    pub skip_stop_words: bool,
    pub min_len: usize,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self {
            skip_stop_words: false,
            min_len: 1,
        }
    }
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        // Keep letters, digits and the symbols that carry meaning in tags like "C++" or "C#".
        let strip_regex = Regex::new(r"[^\p{L}\p{N}+#]")
            .map_err(|e| CareerMatcherError::Processing(format!("Invalid token regex: {}", e)))?;

        Ok(Self {
            stop_words: Self::create_stop_words(),
            strip_regex,
        })
    }

    /// Lazily tokenize `text`. Tokens are lowercased and never empty.
    pub fn tokens<'a>(
        &'a self,
        text: &'a str,
        filter: TokenFilter,
    ) -> impl Iterator<Item = String> + 'a {
        text.unicode_words()
            .map(move |word| self.strip_regex.replace_all(word, "").to_lowercase())
            .filter(move |token| {
                !token.is_empty()
                    && token.chars().count() >= filter.min_len
                    && !(filter.skip_stop_words && self.stop_words.contains(token.as_str()))
            })
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    fn create_stop_words() -> HashSet<&'static str> {
        [
            "a", "about", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
            "been", "being", "but", "by", "can", "could", "do", "does", "doing", "enjoy",
            "for", "from", "had", "has", "have", "he", "her", "him", "his", "i", "if", "im",
            "in", "into", "is", "it", "its", "just", "like", "love", "me", "more", "most",
            "my", "myself", "not", "of", "on", "or", "our", "really", "she", "so", "some",
            "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
            "those", "to", "too", "very", "want", "was", "we", "were", "what", "when",
            "which", "who", "will", "with", "would", "you", "your",
        ]
        .into_iter()
        .collect()
    }
}
