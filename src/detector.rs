//! Request-facing classification service.
//!
//! [`SpamDetector`] holds the fitted vectorizer and classifier and exposes
//! a single synchronous operation. It is constructed once at startup from
//! a [`ModelStore`](crate::model::ModelStore) and shared read-only across
//! requests; nothing in the classification path mutates it, so concurrent
//! use needs no locking.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::naive_bayes::{Label, MultinomialNb};
use crate::model::store::ModelStore;
use crate::model::tfidf::TfIdfVectorizer;

/// The result of classifying one message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The predicted label.
    pub classification: Label,
    /// The model's confidence in the label: the maximum posterior class
    /// probability, in `[0, 1]`.
    pub similarity_score: f64,
}

/// A spam detector over immutable fitted artifacts.
#[derive(Debug)]
pub struct SpamDetector {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

impl SpamDetector {
    /// Create a detector from an opened model store.
    pub fn new(store: ModelStore) -> Self {
        let (vectorizer, classifier) = store.into_parts();
        SpamDetector {
            vectorizer,
            classifier,
        }
    }

    /// Classify a message as spam or ham.
    ///
    /// Any input is accepted; an empty or fully-unknown message produces an
    /// all-zero feature vector and falls back to the class priors.
    /// Idempotent within a process: the same message always yields the same
    /// label and score.
    pub fn classify(&self, message: &str) -> Result<Classification> {
        let features = self.vectorizer.transform(message);
        let prediction = self.classifier.predict(&features)?;

        Ok(Classification {
            classification: prediction.label,
            similarity_score: prediction.confidence,
        })
    }
}
