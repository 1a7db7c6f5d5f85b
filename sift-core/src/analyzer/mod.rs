//! Text normalization pipeline.
//!
//! This module provides the processing stages that turn raw message text
//! into the stem string the model was trained on:
//!
//! - **Normalizer**: Unicode-aware case folding and whitespace collapse
//! - **Tokenizer**: punctuation-aware splitting into word-like units
//! - **Stopwords**: the embedded stopword and punctuation sets
//! - **Stemmer**: classic Porter suffix stripping
//!
//! [`MessageNormalizer`] composes the stages in fixed order. The pipeline
//! is deterministic and total: any input maps to a (possibly empty)
//! normalized string, never an error.

pub mod normalizer;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::CaseFolder;
pub use stemmer::Stemmer;
pub use tokenizer::Tokenizer;

use stopwords::{is_punctuation, is_stopword};

/// Complete message normalization pipeline.
///
/// Applies, in order: case folding, tokenization, the alphanumeric
/// filter, stopword and punctuation removal, Porter stemming, and a
/// single-space join. The output contains only lowercase alphanumeric
/// stems; inputs with no surviving token yield an empty string.
///
/// Holds reusable scratch buffers, so methods take `&mut self`; the
/// mapping itself is pure and the same input always yields the same
/// output.
///
/// # Example
///
/// ```
/// use sift_core::analyzer::MessageNormalizer;
///
/// let mut normalizer = MessageNormalizer::new();
/// assert_eq!(normalizer.normalize("Hello, WORLD!!"), "hello world");
/// assert_eq!(normalizer.normalize("the is at on"), "");
/// ```
#[derive(Debug, Default)]
pub struct MessageNormalizer {
    folder: CaseFolder,
    tokenizer: Tokenizer,
    stemmer: Stemmer,
    fold_buf: String,
}

impl MessageNormalizer {
    /// Creates a new pipeline.
    pub fn new() -> Self {
        Self {
            folder: CaseFolder::new(),
            tokenizer: Tokenizer::new(),
            stemmer: Stemmer::new(),
            fold_buf: String::with_capacity(256),
        }
    }

    /// Normalizes a raw message into an existing String buffer.
    ///
    /// Clears the buffer before writing. Total: never fails, the result
    /// is empty when no token survives filtering.
    pub fn normalize_into(&mut self, raw: &str, out: &mut String) {
        out.clear();
        self.folder.fold_into(raw, &mut self.fold_buf);

        let fold_buf = &self.fold_buf;
        let stemmer = &mut self.stemmer;

        self.tokenizer.tokenize(fold_buf, |token, _pos| {
            if !token.chars().all(char::is_alphanumeric) {
                return;
            }
            if is_stopword(token) || is_punctuation(token) {
                return;
            }

            let stem = stemmer.stem(token);
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(stem);
        });
    }

    /// Normalizes a raw message and returns a new String.
    #[inline]
    pub fn normalize(&mut self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        self.normalize_into(raw, &mut out);
        out
    }
}
