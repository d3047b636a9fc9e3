//! Multinomial Naive Bayes classifier over TF-IDF feature vectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamSieveError};

/// Binary message label.
///
/// Serializes as the strings `"Ham"` and `"Spam"`, which is also the wire
/// form used in classification responses.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Label {
    /// A legitimate message.
    Ham,
    /// An unsolicited message.
    Spam,
}

impl Label {
    /// The fixed class ordering used throughout the classifier.
    pub const CLASSES: [Label; 2] = [Label::Ham, Label::Spam];

    /// String form of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "Ham",
            Label::Spam => "Spam",
        }
    }

    fn index(&self) -> usize {
        match self {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classification outcome: the winning label and its posterior
/// probability.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    /// The class with the highest posterior probability.
    pub label: Label,
    /// The maximum posterior probability, in `[0, 1]`.
    pub confidence: f64,
}

/// Multinomial Naive Bayes classifier with Laplace smoothing.
///
/// Fit once against the feature vectors produced by the TF-IDF vectorizer;
/// immutable afterwards. Joint likelihoods are computed in log space and
/// normalized with log-sum-exp, so the reported posteriors form a proper
/// distribution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Laplace smoothing strength.
    alpha: f64,
    /// Per-class log prior, indexed by `Label::CLASSES` order.
    class_log_prior: Vec<f64>,
    /// Per-class, per-feature log likelihood.
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Create a new, unfitted classifier with the default smoothing
    /// (alpha = 1.0).
    pub fn new() -> Self {
        Self::with_alpha(1.0)
    }

    /// Create a new, unfitted classifier with a custom smoothing strength.
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
        }
    }

    /// Whether the classifier has been fitted.
    pub fn is_fitted(&self) -> bool {
        !self.class_log_prior.is_empty()
    }

    /// The feature dimensionality the classifier was fitted against.
    pub fn n_features(&self) -> usize {
        self.feature_log_prob.first().map_or(0, Vec::len)
    }

    /// Fit the classifier on feature vectors and their labels.
    ///
    /// Class priors are the relative class frequencies; per-class feature
    /// likelihoods are Laplace-smoothed over the summed feature values.
    /// Both classes must be represented in the training data.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[Label]) -> Result<()> {
        if features.is_empty() {
            return Err(SpamSieveError::model("cannot fit on empty training data"));
        }
        if features.len() != labels.len() {
            return Err(SpamSieveError::model(format!(
                "got {} feature vectors but {} labels",
                features.len(),
                labels.len()
            )));
        }

        let n_features = features[0].len();
        for row in features {
            if row.len() != n_features {
                return Err(SpamSieveError::model(format!(
                    "inconsistent feature dimensionality: got {}, expected {n_features}",
                    row.len()
                )));
            }
        }

        let n_classes = Label::CLASSES.len();
        let mut class_counts = vec![0usize; n_classes];
        let mut feature_totals = vec![vec![0.0; n_features]; n_classes];

        for (row, label) in features.iter().zip(labels) {
            let c = label.index();
            class_counts[c] += 1;
            for (j, &value) in row.iter().enumerate() {
                feature_totals[c][j] += value;
            }
        }

        let n_samples = features.len() as f64;
        let mut class_log_prior = vec![0.0; n_classes];
        let mut feature_log_prob = vec![vec![0.0; n_features]; n_classes];

        for (c, label) in Label::CLASSES.iter().enumerate() {
            if class_counts[c] == 0 {
                return Err(SpamSieveError::model(format!(
                    "no training examples for class {label}"
                )));
            }
            class_log_prior[c] = (class_counts[c] as f64 / n_samples).ln();

            let total: f64 = feature_totals[c].iter().sum();
            let denominator = total + self.alpha * n_features as f64;
            for j in 0..n_features {
                feature_log_prob[c][j] =
                    ((feature_totals[c][j] + self.alpha) / denominator).ln();
            }
        }

        self.class_log_prior = class_log_prior;
        self.feature_log_prob = feature_log_prob;

        Ok(())
    }

    /// Compute the posterior probability of each class for a feature
    /// vector, in `Label::CLASSES` order.
    ///
    /// The probabilities sum to 1 (up to floating point). A vector of the
    /// wrong dimensionality is rejected with a model error.
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        if !self.is_fitted() {
            return Err(SpamSieveError::model("classifier has not been fitted"));
        }
        let n_features = self.n_features();
        if features.len() != n_features {
            return Err(SpamSieveError::model(format!(
                "feature dimensionality mismatch: got {}, expected {n_features}",
                features.len()
            )));
        }

        // Joint log likelihood per class: log prior + sum of x_j * log theta_cj
        let mut joint = Vec::with_capacity(self.class_log_prior.len());
        for c in 0..self.class_log_prior.len() {
            let mut log_prob = self.class_log_prior[c];
            for (j, &value) in features.iter().enumerate() {
                if value != 0.0 {
                    log_prob += value * self.feature_log_prob[c][j];
                }
            }
            joint.push(log_prob);
        }

        // Normalize with log-sum-exp
        let max = joint.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = joint.iter().map(|&l| (l - max).exp()).sum();
        Ok(joint.into_iter().map(|l| (l - max).exp() / sum).collect())
    }

    /// Predict the label for a feature vector.
    ///
    /// The first class in `Label::CLASSES` wins exact ties, so an all-zero
    /// vector under equal priors resolves to `Ham` at confidence 0.5.
    pub fn predict(&self, features: &[f64]) -> Result<Prediction> {
        let probabilities = self.predict_proba(features)?;

        let mut best = 0;
        for c in 1..probabilities.len() {
            if probabilities[c] > probabilities[best] {
                best = c;
            }
        }

        Ok(Prediction {
            label: Label::CLASSES[best],
            confidence: probabilities[best],
        })
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new()
    }
}
