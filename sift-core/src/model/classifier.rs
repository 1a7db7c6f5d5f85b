//! Multinomial naive Bayes classifier.
//!
//! Scores a sparse TF-IDF vector against two trained classes (ham and
//! spam) and picks the higher joint log-likelihood. Per class:
//!
//! ```text
//! score[c] = class_log_prior[c] + sum_i x[i] * feature_log_prob[c][i]
//! ```
//!
//! The sum runs only over the non-zero entries of the input vector, so
//! prediction cost is proportional to message length, not vocabulary
//! size.

use sift_types::{Label, Prediction};

use crate::model::artifact::ArtifactError;
use crate::model::vectorizer::SparseVector;

/// Pre-trained two-class multinomial naive Bayes model.
///
/// Immutable after construction. `feature_log_prob` holds one row per
/// class, both rows `n_features` wide.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    /// Builds a classifier from trained parameters.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Invalid` if the two feature rows differ
    /// in width.
    pub fn new(
        class_log_prior: [f64; 2],
        feature_log_prob: [Vec<f64>; 2],
    ) -> Result<Self, ArtifactError> {
        if feature_log_prob[0].len() != feature_log_prob[1].len() {
            return Err(ArtifactError::Invalid(format!(
                "feature log-probability rows differ in width: {} vs {}",
                feature_log_prob[0].len(),
                feature_log_prob[1].len()
            )));
        }
        Ok(Self {
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Number of features the model was trained on.
    #[inline(always)]
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    /// Classifies a sparse feature vector.
    ///
    /// An empty vector scores on the class priors alone. Exact ties go
    /// to ham.
    ///
    /// # Panics
    ///
    /// Debug builds panic if a feature index is out of range; release
    /// builds skip such entries. Vectors produced by a vectorizer with
    /// the same feature count never hit this.
    #[must_use]
    pub fn predict(&self, features: &SparseVector) -> Prediction {
        let mut scores = self.class_log_prior;
        for &(index, weight) in features {
            let index = index as usize;
            debug_assert!(
                index < self.n_features(),
                "classifier: feature index {index} out of range"
            );
            if index >= self.n_features() {
                continue;
            }
            scores[0] += weight * self.feature_log_prob[0][index];
            scores[1] += weight * self.feature_log_prob[1][index];
        }

        let label = if scores[1] > scores[0] {
            Label::Spam
        } else {
            Label::Ham
        };
        Prediction::new(label, scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn classifier() -> MultinomialNb {
        // Features: 0 = "win", 1 = "free", 2 = "lunch".
        MultinomialNb::new(
            [0.6f64.ln(), 0.4f64.ln()],
            [vec![-6.0, -6.0, -1.5], vec![-1.5, -1.5, -6.0]],
        )
        .expect("valid params")
    }

    #[test]
    fn empty_vector_falls_back_to_priors() {
        let c = classifier();
        let p = c.predict(&SparseVector::new());
        assert_eq!(p.label, Label::Ham);
        assert!((p.scores[0] - 0.6f64.ln()).abs() < 1e-12);
        assert!((p.scores[1] - 0.4f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn spam_features_flag_spam() {
        let x: SparseVector = smallvec![(0, 0.8), (1, 0.6)];
        let p = classifier().predict(&x);
        assert_eq!(p.label, Label::Spam);
        assert!(p.log_odds() > 0.0);
    }

    #[test]
    fn ham_features_stay_ham() {
        let x: SparseVector = smallvec![(2, 1.0)];
        let p = classifier().predict(&x);
        assert_eq!(p.label, Label::Ham);
        assert!(p.log_odds() < 0.0);
    }

    #[test]
    fn exact_tie_goes_to_ham() {
        let c = MultinomialNb::new([0.0, 0.0], [vec![-2.0], vec![-2.0]]).expect("valid");
        let x: SparseVector = smallvec![(0, 1.0)];
        assert_eq!(c.predict(&x).label, Label::Ham);
    }

    #[test]
    fn prediction_is_deterministic() {
        let c = classifier();
        let x: SparseVector = smallvec![(0, 0.5), (2, 0.5)];
        assert_eq!(c.predict(&x), c.predict(&x));
    }

    #[test]
    fn scores_scale_with_weight() {
        let c = classifier();
        let small: SparseVector = smallvec![(0, 0.1)];
        let large: SparseVector = smallvec![(0, 0.9)];
        assert!(c.predict(&large).log_odds() > c.predict(&small).log_odds());
    }

    #[test]
    fn rejects_mismatched_rows() {
        let err = MultinomialNb::new([0.0, 0.0], [vec![-1.0, -1.0], vec![-1.0]]);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn n_features_matches_rows() {
        assert_eq!(classifier().n_features(), 3);
    }
}
