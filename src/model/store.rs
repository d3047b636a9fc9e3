//! Model store: ensures fitted artifacts exist before any request is
//! served.
//!
//! On open, the store either loads a previously persisted vectorizer and
//! classifier from storage or, when no artifacts exist at all, fits both
//! from the bootstrap corpus and persists them for future process starts.
//! This is the only place artifacts are written; once `open` returns they
//! are read-only for the process lifetime.
//!
//! Corrupt or inconsistent artifacts (unparseable JSON, a vocabulary size
//! that does not match the classifier's feature count, or only one of the
//! two blobs present) abort startup instead of being silently refit,
//! since serving with mismatched artifacts produces meaningless results.

use crate::error::{Result, SpamSieveError};
use crate::model::bootstrap;
use crate::model::naive_bayes::MultinomialNb;
use crate::model::tfidf::TfIdfVectorizer;
use crate::storage::Storage;

/// Well-known name of the persisted vectorizer artifact.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Well-known name of the persisted classifier artifact.
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// A consistent pair of fitted artifacts.
#[derive(Debug)]
pub struct ModelStore {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

impl ModelStore {
    /// Load fitted artifacts from storage, or fit and persist them from
    /// the bootstrap corpus when none exist.
    pub fn open(storage: &dyn Storage) -> Result<Self> {
        match (
            storage.exists(VECTORIZER_FILE),
            storage.exists(CLASSIFIER_FILE),
        ) {
            (true, true) => Self::load(storage),
            (false, false) => {
                log::info!("no fitted artifacts found, fitting from bootstrap corpus");
                let store = Self::fit_bootstrap()?;
                store.persist(storage)?;
                Ok(store)
            }
            _ => Err(SpamSieveError::invalid_config(format!(
                "exactly one of {VECTORIZER_FILE} and {CLASSIFIER_FILE} exists; \
                 refusing to serve with inconsistent artifacts"
            ))),
        }
    }

    /// Fit both artifacts from the bootstrap corpus without touching
    /// storage.
    pub fn fit_bootstrap() -> Result<Self> {
        let (documents, labels) = bootstrap::documents_and_labels();

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&documents)?;

        let rows: Vec<Vec<f64>> = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect();

        let mut classifier = MultinomialNb::new();
        classifier.fit(&rows, &labels)?;

        let store = ModelStore {
            vectorizer,
            classifier,
        };
        store.validate()?;
        Ok(store)
    }

    fn load(storage: &dyn Storage) -> Result<Self> {
        let vectorizer: TfIdfVectorizer =
            serde_json::from_slice(&storage.read(VECTORIZER_FILE)?)?;
        let classifier: MultinomialNb = serde_json::from_slice(&storage.read(CLASSIFIER_FILE)?)?;

        let store = ModelStore {
            vectorizer,
            classifier,
        };
        store.validate()?;
        log::info!(
            "loaded fitted artifacts ({} vocabulary terms)",
            store.vectorizer.vocabulary_size()
        );
        Ok(store)
    }

    fn persist(&self, storage: &dyn Storage) -> Result<()> {
        storage.write(VECTORIZER_FILE, &serde_json::to_vec(&self.vectorizer)?)?;
        storage.write(CLASSIFIER_FILE, &serde_json::to_vec(&self.classifier)?)?;
        log::info!(
            "persisted fitted artifacts ({} vocabulary terms)",
            self.vectorizer.vocabulary_size()
        );
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let vocabulary = self.vectorizer.vocabulary_size();
        let features = self.classifier.n_features();
        if vocabulary != features {
            return Err(SpamSieveError::invalid_config(format!(
                "vectorizer vocabulary has {vocabulary} terms but classifier expects \
                 {features} features"
            )));
        }
        Ok(())
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// The fitted classifier.
    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }

    /// Consume the store, yielding both fitted artifacts.
    pub fn into_parts(self) -> (TfIdfVectorizer, MultinomialNb) {
        (self.vectorizer, self.classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn test_open_empty_storage_fits_and_persists() {
        let storage = MemoryStorage::new();
        let store = ModelStore::open(&storage).unwrap();

        assert!(storage.exists(VECTORIZER_FILE));
        assert!(storage.exists(CLASSIFIER_FILE));
        assert!(store.vectorizer().vocabulary_size() > 0);
        assert_eq!(
            store.vectorizer().vocabulary_size(),
            store.classifier().n_features()
        );
    }

    #[test]
    fn test_open_loads_existing_artifacts() {
        let storage = MemoryStorage::new();
        let first = ModelStore::open(&storage).unwrap();
        let second = ModelStore::open(&storage).unwrap();

        assert_eq!(
            first.vectorizer().vocabulary_size(),
            second.vectorizer().vocabulary_size()
        );
        // The loaded artifacts produce identical features.
        assert_eq!(
            first.vectorizer().transform("free money"),
            second.vectorizer().transform("free money")
        );
    }

    #[test]
    fn test_corrupt_artifact_is_fatal() {
        let storage = MemoryStorage::new();
        ModelStore::open(&storage).unwrap();
        storage.write(VECTORIZER_FILE, b"not json").unwrap();

        assert!(ModelStore::open(&storage).is_err());
    }

    #[test]
    fn test_single_artifact_is_fatal() {
        let storage = MemoryStorage::new();
        storage.write(CLASSIFIER_FILE, b"{}").unwrap();

        assert!(ModelStore::open(&storage).is_err());
    }

    #[test]
    fn test_fit_bootstrap_is_deterministic() {
        let a = ModelStore::fit_bootstrap().unwrap();
        let b = ModelStore::fit_bootstrap().unwrap();

        let features_a = a.vectorizer().transform("Free money waiting for you");
        let features_b = b.vectorizer().transform("Free money waiting for you");
        assert_eq!(features_a, features_b);
    }
}
