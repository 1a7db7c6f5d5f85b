//! TF-IDF vectorization of normalized messages.
//!
//! The vectorizer owns the trained vocabulary (term -> feature index) and
//! one inverse-document-frequency weight per feature. Transforming a
//! normalized message is: space-split token lookup, raw term counts,
//! `tf * idf`, then L2 normalization. Out-of-vocabulary tokens are
//! silently ignored; the trained feature space is closed.

use rustc_hash::FxHashMap;
use sift_types::FeatureIndex;
use smallvec::SmallVec;

use crate::model::artifact::ArtifactError;

/// Sparse feature vector: `(feature index, weight)` pairs sorted by
/// ascending index. Inline capacity covers typical SMS-length messages
/// without spilling to the heap.
pub type SparseVector = SmallVec<[(FeatureIndex, f64); 32]>;

/// Pre-trained TF-IDF vectorizer.
///
/// Immutable after construction; `transform` has no side effects and may
/// be called repeatedly.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: FxHashMap<Box<str>, FeatureIndex>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Builds a vectorizer from trained parameters.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Invalid` if the IDF table length does not
    /// match the vocabulary size, or if any vocabulary index is out of
    /// range or duplicated.
    pub fn new(
        vocabulary: FxHashMap<Box<str>, FeatureIndex>,
        idf: Vec<f64>,
    ) -> Result<Self, ArtifactError> {
        if idf.len() != vocabulary.len() {
            return Err(ArtifactError::Invalid(format!(
                "idf table has {} entries for a vocabulary of {} terms",
                idf.len(),
                vocabulary.len()
            )));
        }

        let mut seen = vec![false; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let slot = seen.get_mut(index as usize).ok_or_else(|| {
                ArtifactError::Invalid(format!(
                    "term {term:?} has index {index}, outside the {}-feature space",
                    idf.len()
                ))
            })?;
            if *slot {
                return Err(ArtifactError::Invalid(format!(
                    "feature index {index} assigned to more than one term"
                )));
            }
            *slot = true;
        }

        Ok(Self { vocabulary, idf })
    }

    /// Number of features in the trained vocabulary.
    #[inline(always)]
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Transforms a normalized message into an existing sparse vector.
    ///
    /// Clears the output first. The result is empty when no token of the
    /// message is in the vocabulary.
    pub fn transform_into(&self, normalized: &str, out: &mut SparseVector) {
        out.clear();
        if normalized.is_empty() {
            return;
        }

        let mut indices: SmallVec<[FeatureIndex; 32]> = SmallVec::new();
        for token in normalized.split(' ') {
            if let Some(&index) = self.vocabulary.get(token) {
                indices.push(index);
            }
        }
        if indices.is_empty() {
            return;
        }
        indices.sort_unstable();

        let mut norm_sq = 0.0f64;
        let mut i = 0usize;
        while i < indices.len() {
            let index = indices[i];
            let mut count = 1usize;
            while i + count < indices.len() && indices[i + count] == index {
                count += 1;
            }
            let weight = count as f64 * self.idf[index as usize];
            norm_sq += weight * weight;
            out.push((index, weight));
            i += count;
        }

        let norm = norm_sq.sqrt();
        if norm > 0.0 {
            for (_, weight) in out.iter_mut() {
                *weight /= norm;
            }
        }
    }

    /// Transforms a normalized message and returns a new sparse vector.
    #[inline]
    pub fn transform(&self, normalized: &str) -> SparseVector {
        let mut out = SparseVector::new();
        self.transform_into(normalized, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> FxHashMap<Box<str>, FeatureIndex> {
        terms
            .iter()
            .enumerate()
            .map(|(i, t)| (Box::from(*t), i as FeatureIndex))
            .collect()
    }

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer::new(
            vocab(&["cash", "free", "win"]),
            vec![1.0, 2.0, 1.5],
        )
        .expect("valid params")
    }

    #[test]
    fn empty_message_is_empty_vector() {
        assert!(vectorizer().transform("").is_empty());
    }

    #[test]
    fn out_of_vocabulary_tokens_ignored() {
        let v = vectorizer();
        assert!(v.transform("lunch tomorrow").is_empty());

        let x = v.transform("free lunch");
        assert_eq!(x.len(), 1);
        assert_eq!(x[0].0, 1);
    }

    #[test]
    fn indices_sorted_ascending() {
        let x = vectorizer().transform("win free cash");
        let indices: Vec<_> = x.iter().map(|&(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn repeated_terms_accumulate() {
        let v = vectorizer();
        let once = v.transform("cash free");
        let twice = v.transform("cash cash free");

        // With idf 1.0 vs 2.0, doubling the "cash" count shifts L2 mass
        // toward feature 0.
        assert!(twice[0].1 > once[0].1);
        assert!(twice[1].1 < once[1].1);
    }

    #[test]
    fn output_is_l2_normalized() {
        for msg in ["cash", "win free", "win free cash cash"] {
            let x = vectorizer().transform(msg);
            let norm_sq: f64 = x.iter().map(|&(_, w)| w * w).sum();
            assert!((norm_sq - 1.0).abs() < 1e-12, "norm {norm_sq} for {msg}");
        }
    }

    #[test]
    fn idf_weights_applied() {
        // Single-token messages normalize to weight 1.0 regardless of
        // idf, so compare within one vector instead.
        let x = vectorizer().transform("cash free");
        let w_cash = x[0].1;
        let w_free = x[1].1;
        assert!((w_free / w_cash - 2.0).abs() < 1e-12);
    }

    #[test]
    fn transform_is_repeatable() {
        let v = vectorizer();
        assert_eq!(v.transform("win free cash"), v.transform("win free cash"));
    }

    #[test]
    fn rejects_idf_length_mismatch() {
        let err = TfidfVectorizer::new(vocab(&["a", "b"]), vec![1.0]);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut v = vocab(&["a", "b"]);
        v.insert(Box::from("c"), 9);
        let err = TfidfVectorizer::new(v, vec![1.0, 1.0, 1.0]);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn rejects_duplicate_index() {
        let mut v = vocab(&["a", "b"]);
        v.insert(Box::from("c"), 1);
        let err = TfidfVectorizer::new(v, vec![1.0, 1.0, 1.0]);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
    }
}
