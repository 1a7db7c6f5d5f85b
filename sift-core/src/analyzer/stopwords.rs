//! Embedded stopword and punctuation sets.
//!
//! Both sets are fixed at compile time so that normalization is fully
//! deterministic and never reaches for the filesystem or network. The
//! stopword list is the standard English list the model was trained
//! against (179 entries, including the bare contraction fragments like
//! "ve" and "ll" that tokenization produces). Any drift here silently
//! degrades classifier accuracy, so the data must not be edited without
//! retraining.

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// ASCII punctuation characters, matching Python's `string.punctuation`.
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// English stopwords, in the original list order.
#[rustfmt::skip]
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "you're", "you've", "you'll", "you'd", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am",
    "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've",
    "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
    "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't",
    "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't",
    "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

fn stopword_set() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Returns `true` if `token` is in the embedded English stopword list.
///
/// The token is expected to be lowercase already; no case folding is
/// performed here.
#[inline]
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token)
}

/// Returns `true` if `byte` is one of the fixed ASCII punctuation characters.
#[inline(always)]
#[must_use]
pub const fn is_punct_byte(byte: u8) -> bool {
    matches!(byte,
        b'!'..=b'/' | b':'..=b'@' | b'['..=b'`' | b'{'..=b'~')
}

/// Returns `true` if `token` is a single character from the punctuation set.
///
/// Redundant after the alphanumeric filter, but kept as its own check so
/// the removal semantics match the training pipeline exactly.
#[inline]
#[must_use]
pub fn is_punctuation(token: &str) -> bool {
    token.len() == 1 && is_punct_byte(token.as_bytes()[0])
}
