//! The spam filter facade.
//!
//! [`SpamFilter`] wires the normalization pipeline to the pre-trained
//! model: raw text in, [`Prediction`] out. It owns reusable scratch
//! buffers for the normalized string and the feature vector, so a
//! long-running session classifies without per-message allocation once
//! the buffers are warm.

use std::path::Path;

use sift_types::{Label, Prediction};

use crate::analyzer::MessageNormalizer;
use crate::model::{
    load_classifier, load_vectorizer, ArtifactError, MultinomialNb, SparseVector, TfidfVectorizer,
};

/// Running session counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterMetrics {
    /// Total messages classified so far.
    pub messages_classified: u64,
    /// How many of those were flagged as spam.
    pub spam_flagged: u64,
}

/// End-to-end SMS spam filter.
///
/// Classification is total and deterministic: any input string yields a
/// prediction, and the same input always yields the same prediction.
/// Messages that normalize to nothing (empty, whitespace, pure
/// punctuation, all stopwords) score on the class priors alone, which
/// resolves to ham.
///
/// Not `Sync`: methods take `&mut self` for buffer reuse. Use one
/// filter per thread.
#[derive(Debug)]
pub struct SpamFilter {
    normalizer: MessageNormalizer,
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
    norm_buf: String,
    feature_buf: SparseVector,
    metrics: FilterMetrics,
}

impl SpamFilter {
    /// Builds a filter from already-constructed model components.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Invalid` when the vectorizer and the
    /// classifier disagree on the feature count. The two artifacts must
    /// come from the same training run.
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: MultinomialNb,
    ) -> Result<Self, ArtifactError> {
        if vectorizer.n_features() != classifier.n_features() {
            return Err(ArtifactError::Invalid(format!(
                "vectorizer has {} features but classifier expects {}",
                vectorizer.n_features(),
                classifier.n_features()
            )));
        }
        Ok(Self {
            normalizer: MessageNormalizer::new(),
            vectorizer,
            classifier,
            norm_buf: String::with_capacity(256),
            feature_buf: SparseVector::new(),
            metrics: FilterMetrics::default(),
        })
    }

    /// Loads both model artifacts and builds a filter.
    ///
    /// # Errors
    ///
    /// Fails if either artifact cannot be read, parsed, or validated,
    /// or if the two disagree on the feature count.
    pub fn from_artifacts(
        vectorizer_path: impl AsRef<Path>,
        classifier_path: impl AsRef<Path>,
    ) -> Result<Self, ArtifactError> {
        let vectorizer = load_vectorizer(vectorizer_path)?;
        let classifier = load_classifier(classifier_path)?;
        let filter = Self::new(vectorizer, classifier)?;
        log::info!(
            "spam filter ready: {} features",
            filter.vectorizer.n_features()
        );
        Ok(filter)
    }

    /// Classifies a raw message.
    pub fn classify(&mut self, raw: &str) -> Prediction {
        let mut norm_buf = std::mem::take(&mut self.norm_buf);
        self.normalizer.normalize_into(raw, &mut norm_buf);
        self.vectorizer.transform_into(&norm_buf, &mut self.feature_buf);
        self.norm_buf = norm_buf;

        let prediction = self.classifier.predict(&self.feature_buf);

        self.metrics.messages_classified += 1;
        if prediction.label == Label::Spam {
            self.metrics.spam_flagged += 1;
        }
        log::debug!(
            "classified message ({} features): {}",
            self.feature_buf.len(),
            prediction
        );
        prediction
    }

    /// Runs only the normalization pipeline, for inspection.
    #[inline]
    pub fn normalize(&mut self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Session counters since construction.
    #[inline]
    #[must_use]
    pub fn metrics(&self) -> FilterMetrics {
        self.metrics
    }
}
