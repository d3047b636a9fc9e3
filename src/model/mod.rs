//! Fitted model artifacts: feature extraction, classification, and
//! persistence.
//!
//! # Architecture
//!
//! - [`TfIdfVectorizer`]: feature extraction over a fixed vocabulary
//! - [`MultinomialNb`]: multinomial Naive Bayes classifier
//! - [`ModelStore`]: load-or-fit bootstrap over a storage backend
//! - [`bootstrap`]: the fixed labeled corpus used when no artifacts exist
//!
//! The vectorizer and classifier are fit exactly once, against the same
//! corpus, and are immutable afterwards. A vocabulary/feature-count
//! mismatch between the two is a fatal configuration error caught by the
//! store before any request is served.

pub mod bootstrap;
pub mod naive_bayes;
pub mod store;
pub mod tfidf;

pub use naive_bayes::{Label, MultinomialNb, Prediction};
pub use store::ModelStore;
pub use tfidf::TfIdfVectorizer;
