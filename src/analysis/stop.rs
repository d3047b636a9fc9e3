//! Stop word filter implementation.
//!
//! Removes common English words (stop words) that carry no class signal
//! before tokens are counted. Supports a custom word list for callers that
//! need different behavior.
//!
//! # Examples
//!
//! ```
//! use spamsieve::analysis::stop::StopFilter;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec!["the".to_string(), "quick".to_string(), "brown".to_string()];
//!
//! let result = filter.filter(tokens);
//!
//! // "the" is removed as a stop word
//! assert_eq!(result, vec!["quick", "brown"]);
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words list.
///
/// Common English words that are typically filtered out before counting.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from a token list.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of words to remove.
    stop_words: HashSet<String>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            stop_words: DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
        }
    }

    /// Create a new stop filter with a custom word list.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a token is a stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Remove stop words from the token list, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_stop_words() {
        let filter = StopFilter::new();
        let result = filter.filter(words(&["the", "quick", "brown", "fox"]));
        assert_eq!(result, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_preserves_order() {
        let filter = StopFilter::new();
        let result = filter.filter(words(&["free", "money", "for", "you"]));
        assert_eq!(result, vec!["free", "money", "you"]);
    }

    #[test]
    fn test_custom_word_list() {
        let filter = StopFilter::with_words(["spamword"]);
        assert!(filter.is_stop_word("spamword"));
        assert!(!filter.is_stop_word("the"));
    }

    #[test]
    fn test_is_stop_word() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("at"));
        assert!(!filter.is_stop_word("lottery"));
    }
}
