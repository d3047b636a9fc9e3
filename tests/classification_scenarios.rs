//! End-to-end classification scenarios over durable storage.

use spamsieve::detector::SpamDetector;
use spamsieve::model::Label;
use spamsieve::model::store::{CLASSIFIER_FILE, ModelStore, VECTORIZER_FILE};
use spamsieve::storage::Storage;
use spamsieve::storage::file::FileStorage;
use tempfile::TempDir;

fn open_detector(dir: &TempDir) -> SpamDetector {
    let storage = FileStorage::new(dir.path()).unwrap();
    SpamDetector::new(ModelStore::open(&storage).unwrap())
}

#[test]
fn spam_message_classified_with_confidence() {
    let dir = TempDir::new().unwrap();
    let detector = open_detector(&dir);

    let result = detector.classify("Free money waiting for you").unwrap();
    assert_eq!(result.classification, Label::Spam);
    assert!(result.similarity_score > 0.5);
}

#[test]
fn ham_message_classified_with_confidence() {
    let dir = TempDir::new().unwrap();
    let detector = open_detector(&dir);

    let result = detector.classify("Meeting at 3pm tomorrow").unwrap();
    assert_eq!(result.classification, Label::Ham);
    assert!(result.similarity_score > 0.5);
}

#[test]
fn empty_message_yields_valid_result() {
    let dir = TempDir::new().unwrap();
    let detector = open_detector(&dir);

    // An empty message produces an all-zero feature vector; the classifier
    // falls back to the class priors rather than failing.
    let result = detector.classify("").unwrap();
    assert!((0.0..=1.0).contains(&result.similarity_score));
    assert!((result.similarity_score - 0.5).abs() < 1e-9);
}

#[test]
fn classification_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let detector = open_detector(&dir);

    let first = detector.classify("Claim your prize money").unwrap();
    let second = detector.classify("Claim your prize money").unwrap();
    assert_eq!(first.classification, second.classification);
    assert_eq!(first.similarity_score, second.similarity_score);
}

#[test]
fn first_open_persists_artifacts() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    ModelStore::open(&storage).unwrap();
    assert!(storage.exists(VECTORIZER_FILE));
    assert!(storage.exists(CLASSIFIER_FILE));
}

#[test]
fn reloaded_artifacts_classify_identically() {
    let dir = TempDir::new().unwrap();

    // First process start fits and persists; the second loads.
    let fitted = open_detector(&dir);
    let loaded = open_detector(&dir);

    for message in [
        "Congratulations you won lottery",
        "Project deadline reminder",
        "Your package has been delivered",
    ] {
        let a = fitted.classify(message).unwrap();
        let b = loaded.classify(message).unwrap();
        assert_eq!(a.classification, b.classification, "label drift for {message:?}");
        assert_eq!(a.similarity_score, b.similarity_score, "score drift for {message:?}");
    }
}

#[test]
fn corrupt_artifact_prevents_startup() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    ModelStore::open(&storage).unwrap();
    storage.write(VECTORIZER_FILE, b"garbage").unwrap();

    assert!(ModelStore::open(&storage).is_err());
}

#[test]
fn bootstrap_corpus_messages_classified_by_their_label() {
    let dir = TempDir::new().unwrap();
    let detector = open_detector(&dir);

    // Training examples should at least be classified consistently with
    // their own labels.
    let expectations = [
        ("Get rich quick! Buy now!", Label::Spam),
        ("Wire transfer request urgent", Label::Spam),
        ("Team lunch next week", Label::Ham),
        ("Interview scheduled for Monday", Label::Ham),
    ];

    for (message, expected) in expectations {
        let result = detector.classify(message).unwrap();
        assert_eq!(result.classification, expected, "for {message:?}");
        assert!(result.similarity_score > 0.5, "low confidence for {message:?}");
    }
}
