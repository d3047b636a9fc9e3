//! TF-IDF vectorizer for text feature extraction.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::error::{Result, SpamSieveError};

/// TF-IDF vectorizer for text feature extraction.
///
/// The vocabulary and IDF table are fixed at fit time. Every vector
/// produced by [`transform`](TfIdfVectorizer::transform) has exactly
/// `vocabulary_size()` dimensions, and index `i` always corresponds to the
/// same token for the lifetime of the fitted state.
#[derive(Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each word.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization. Deterministic, so it is rebuilt rather
    /// than serialized.
    #[serde(skip, default)]
    analyzer: Analyzer,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted TF-IDF vectorizer.
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer: Analyzer::new(),
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// Builds the vocabulary in token encounter order (so two fits over the
    /// same corpus assign identical indices) and computes a smoothed IDF
    /// weight per term.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(SpamSieveError::model("cannot fit on an empty corpus"));
        }

        self.n_documents = documents.len();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        // Build vocabulary and count document frequencies
        for doc in documents {
            let tokens = self.analyzer.analyze(doc);
            let mut seen_in_doc: HashSet<&str> = HashSet::new();

            for token in &tokens {
                if !vocabulary.contains_key(token.as_str()) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token.clone(), idx);
                }
                if seen_in_doc.insert(token) {
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        // Calculate IDF for each term
        let mut idf = vec![0.0; vocabulary.len()];
        for (word, &idx) in &vocabulary {
            let df = document_frequency.get(word).copied().unwrap_or(0);
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf[idx] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Tokens outside the fitted vocabulary contribute nothing; an empty or
    /// fully-unknown document yields an all-zero vector, which is a valid
    /// classifier input. Deterministic: the same text always produces a
    /// bit-identical vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens = self.analyzer.analyze(document);
        let mut features = vec![0.0; self.vocabulary.len()];

        // Count term frequencies for known vocabulary tokens
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                features[idx] += 1.0;
            }
        }

        // Apply IDF
        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        features
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Look up the feature index assigned to a vocabulary token.
    pub fn vocabulary_index(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }
}
