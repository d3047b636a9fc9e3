//! Bootstrap training corpus.
//!
//! The fixed labeled examples the extractor and classifier are fit from
//! when no persisted artifacts exist. The corpus is a fixture, not a
//! production training set; swap in persisted artifacts for anything
//! beyond smoke-level accuracy.

use crate::model::naive_bayes::Label;

/// The fixed bootstrap corpus: 10 labeled example messages.
pub const BOOTSTRAP_CORPUS: &[(&str, Label)] = &[
    ("Get rich quick! Buy now!", Label::Spam),
    ("Claim your prize money", Label::Spam),
    ("Meeting at 3pm tomorrow", Label::Ham),
    ("Project deadline reminder", Label::Ham),
    ("Free money waiting for you", Label::Spam),
    ("Your package has been delivered", Label::Ham),
    ("Wire transfer request urgent", Label::Spam),
    ("Team lunch next week", Label::Ham),
    ("Congratulations you won lottery", Label::Spam),
    ("Interview scheduled for Monday", Label::Ham),
];

/// Split the bootstrap corpus into parallel document and label vectors.
pub fn documents_and_labels() -> (Vec<String>, Vec<Label>) {
    let documents = BOOTSTRAP_CORPUS
        .iter()
        .map(|(text, _)| text.to_string())
        .collect();
    let labels = BOOTSTRAP_CORPUS.iter().map(|(_, label)| *label).collect();
    (documents, labels)
}
