//! Text normalizer implementation.
//!
//! Canonicalizes raw message text before tokenization: everything is
//! lower-cased and any character that is not an ASCII letter or whitespace
//! is removed (not replaced). Whitespace runs pass through unchanged, so
//! token boundaries in the original text are preserved.
//!
//! # Examples
//!
//! ```
//! use spamsieve::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! assert_eq!(normalizer.normalize("Meeting at 3pm!"), "meeting at pm");
//! ```

/// A normalizer that reduces text to lower-case ASCII letters and whitespace.
#[derive(Clone, Debug, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Normalizer
    }

    /// Normalize raw text into canonical form.
    ///
    /// Total function: never fails, for any input including the empty
    /// string. The output always matches `^[a-z\s]*$`.
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect()
    }
}
