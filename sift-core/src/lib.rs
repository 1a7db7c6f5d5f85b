//! SMS spam classification engine.
//!
//! Optimized for short, English-oriented messages and single-threaded,
//! request-per-call workloads. The engine is split into two halves:
//!
//! - [`analyzer`] - the deterministic text-normalization pipeline that maps
//!   raw message text to the space-joined stem string the model was trained
//!   on (case folding, tokenization, alphanumeric and stopword filtering,
//!   Porter stemming).
//! - [`model`] - the pre-trained TF-IDF vectorizer and multinomial naive
//!   Bayes classifier, loaded once from read-only JSON artifacts.
//!
//! [`SpamFilter`] composes both halves behind a single `classify` call.
//!
//! Threading:
//! - [`SpamFilter`] is intentionally not shared across threads. It uses
//!   reusable mutable scratch buffers that are not safe to share.

pub mod analyzer;
pub mod filter;
pub mod model;

pub use analyzer::MessageNormalizer;
pub use filter::{FilterMetrics, SpamFilter};
pub use model::{ArtifactError, MultinomialNb, TfidfVectorizer};
