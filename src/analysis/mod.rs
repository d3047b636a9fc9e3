//! Text analysis pipeline for message classification.
//!
//! The pipeline turns raw message text into a list of countable tokens in
//! three deterministic stages:
//!
//! 1. [`Normalizer`] — lower-case, strip everything but ASCII letters and
//!    whitespace
//! 2. [`WhitespaceTokenizer`] — split on whitespace
//! 3. [`StopFilter`] — drop common English stop words
//!
//! [`Analyzer`] composes the three stages and is the only entry point the
//! feature extractor uses, both at fit time and per request.
//!
//! # Examples
//!
//! ```
//! use spamsieve::analysis::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let tokens = analyzer.analyze("Claim your PRIZE at 3pm!");
//!
//! // "at" is filtered out as a stop word, "3pm" loses its digit
//! assert_eq!(tokens, vec!["claim", "your", "prize", "pm"]);
//! ```

pub mod normalizer;
pub mod stop;
pub mod tokenizer;

pub use normalizer::Normalizer;
pub use stop::StopFilter;
pub use tokenizer::WhitespaceTokenizer;

/// A text analyzer composing normalization, tokenization, and stop word
/// filtering.
///
/// Deterministic and total: any input, including the empty string, produces
/// a (possibly empty) token list and never an error.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    normalizer: Normalizer,
    tokenizer: WhitespaceTokenizer,
    stop_filter: StopFilter,
}

impl Analyzer {
    /// Create a new analyzer with default settings.
    pub fn new() -> Self {
        Analyzer {
            normalizer: Normalizer::new(),
            tokenizer: WhitespaceTokenizer::new(),
            stop_filter: StopFilter::new(),
        }
    }

    /// Analyze text into a list of normalized, filtered tokens.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        let tokens = self.tokenizer.tokenize(&normalized);
        self.stop_filter.filter(tokens)
    }

    /// Get the name of this analyzer for debugging and logging.
    pub fn name(&self) -> &'static str {
        "standard"
    }
}
