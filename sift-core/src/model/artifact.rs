//! Model artifact loading.
//!
//! Trained parameters ship as two JSON files next to the binary:
//!
//! - `vectorizer.json` - vocabulary and IDF table
//! - `model.json` - class priors and per-class feature log-probabilities
//!
//! Both are read once at startup and validated before the engine is
//! built; a missing, malformed, or inconsistent artifact is a fatal
//! error, never a silent fallback.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use sift_types::FeatureIndex;

use crate::model::classifier::MultinomialNb;
use crate::model::vectorizer::TfidfVectorizer;

/// Errors raised while loading or validating a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact file is not valid JSON for the expected shape.
    #[error("failed to parse artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// The artifact parsed but its parameters are inconsistent.
    #[error("invalid artifact: {0}")]
    Invalid(String),
}

/// On-disk shape of `vectorizer.json`.
#[derive(Debug, Deserialize)]
struct VectorizerParams {
    vocabulary: FxHashMap<Box<str>, FeatureIndex>,
    idf: Vec<f64>,
}

/// On-disk shape of `model.json`.
#[derive(Debug, Deserialize)]
struct ClassifierParams {
    classes: Vec<u32>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

/// Loads and validates the TF-IDF vectorizer from a JSON artifact.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid JSON, or carries an
/// inconsistent vocabulary (see [`TfidfVectorizer::new`]).
pub fn load_vectorizer(path: impl AsRef<Path>) -> Result<TfidfVectorizer, ArtifactError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let params: VectorizerParams = serde_json::from_reader(BufReader::new(file))?;

    log::debug!(
        "loaded vectorizer from {}: {} terms",
        path.display(),
        params.vocabulary.len()
    );

    TfidfVectorizer::new(params.vocabulary, params.idf)
}

/// Loads and validates the naive Bayes classifier from a JSON artifact.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid JSON, or does not
/// describe exactly the two classes `[0, 1]` (ham, spam) with matching
/// prior and feature-row counts.
pub fn load_classifier(path: impl AsRef<Path>) -> Result<MultinomialNb, ArtifactError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let params: ClassifierParams = serde_json::from_reader(BufReader::new(file))?;

    if params.classes != [0, 1] {
        return Err(ArtifactError::Invalid(format!(
            "expected classes [0, 1], artifact has {:?}",
            params.classes
        )));
    }
    let &[p0, p1] = params.class_log_prior.as_slice() else {
        return Err(ArtifactError::Invalid(format!(
            "expected 2 class priors, artifact has {}",
            params.class_log_prior.len()
        )));
    };
    let [row0, row1]: [Vec<f64>; 2] =
        params.feature_log_prob.try_into().map_err(|rows: Vec<_>| {
            ArtifactError::Invalid(format!(
                "expected 2 feature log-probability rows, artifact has {}",
                rows.len()
            ))
        })?;

    log::debug!(
        "loaded classifier from {}: {} features",
        path.display(),
        row0.len()
    );

    MultinomialNb::new([p0, p1], [row0, row1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sift-artifact-{name}-{}", std::process::id()));
        let mut file = File::create(&path).expect("create temp artifact");
        file.write_all(contents.as_bytes()).expect("write artifact");
        path
    }

    #[test]
    fn loads_valid_vectorizer() {
        let path = write_temp(
            "vec-ok",
            r#"{"vocabulary": {"win": 0, "free": 1}, "idf": [1.2, 3.4]}"#,
        );
        let v = load_vectorizer(&path).expect("valid artifact");
        assert_eq!(v.n_features(), 2);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loads_valid_classifier() {
        let path = write_temp(
            "clf-ok",
            r#"{
                "classes": [0, 1],
                "class_log_prior": [-0.5, -0.9],
                "feature_log_prob": [[-1.0, -2.0], [-2.0, -1.0]]
            }"#,
        );
        let c = load_classifier(&path).expect("valid artifact");
        assert_eq!(c.n_features(), 2);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_vectorizer("/nonexistent/vectorizer.json");
        assert!(matches!(err, Err(ArtifactError::Io(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let path = write_temp("vec-bad-json", "{not json");
        let err = load_vectorizer(&path);
        assert!(matches!(err, Err(ArtifactError::Json(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_field_is_parse_error() {
        let path = write_temp("vec-no-idf", r#"{"vocabulary": {"win": 0}}"#);
        let err = load_vectorizer(&path);
        assert!(matches!(err, Err(ArtifactError::Json(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn idf_vocabulary_mismatch_rejected() {
        let path = write_temp(
            "vec-mismatch",
            r#"{"vocabulary": {"win": 0, "free": 1}, "idf": [1.0]}"#,
        );
        let err = load_vectorizer(&path);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn wrong_classes_rejected() {
        let path = write_temp(
            "clf-classes",
            r#"{
                "classes": [1, 2],
                "class_log_prior": [-0.5, -0.9],
                "feature_log_prob": [[-1.0], [-2.0]]
            }"#,
        );
        let err = load_classifier(&path);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn wrong_prior_count_rejected() {
        let path = write_temp(
            "clf-priors",
            r#"{
                "classes": [0, 1],
                "class_log_prior": [-0.5],
                "feature_log_prob": [[-1.0], [-2.0]]
            }"#,
        );
        let err = load_classifier(&path);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn ragged_feature_rows_rejected() {
        let path = write_temp(
            "clf-ragged",
            r#"{
                "classes": [0, 1],
                "class_log_prior": [-0.5, -0.9],
                "feature_log_prob": [[-1.0, -2.0], [-2.0]]
            }"#,
        );
        let err = load_classifier(&path);
        assert!(matches!(err, Err(ArtifactError::Invalid(_))));
        std::fs::remove_file(path).ok();
    }
}
