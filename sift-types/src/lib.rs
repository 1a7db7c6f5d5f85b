//! Core types for the sift spam classifier.
//!
//! This crate provides the fundamental types that are shared across
//! the sift ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Index of a feature (vocabulary term) in the trained model.
///
/// Feature indices are 32-bit unsigned integers. A vocabulary of
/// u32::MAX (~4 billion) terms is far beyond any realistic SMS model
/// while keeping the sparse vector representation compact.
pub type FeatureIndex = u32;

/// Binary classification label.
///
/// The discriminant values match the label encoding used by the
/// training toolchain: 0 = ham (not spam), 1 = spam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Label {
    /// A legitimate message.
    Ham = 0,
    /// An unsolicited message.
    Spam = 1,
}

impl Label {
    /// Creates a label from a class index, as stored in model artifacts.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Label::Ham),
            1 => Some(Label::Spam),
            _ => None,
        }
    }

    /// Returns the class index of this label.
    #[inline(always)]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Returns `true` if this label is [`Label::Spam`].
    #[inline(always)]
    #[must_use]
    pub const fn is_spam(self) -> bool {
        matches!(self, Label::Spam)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// Outcome of classifying a single message.
///
/// Carries the winning label together with the joint log-probability
/// score of each class. The scores are unnormalized (they do not sum
/// to 1) but their difference is the log-odds of the decision, which
/// is useful for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    /// The winning class.
    pub label: Label,
    /// Joint log-probability score per class, indexed by class index.
    pub scores: [f64; 2],
}

impl Prediction {
    /// Creates a new prediction.
    #[inline(always)]
    pub const fn new(label: Label, scores: [f64; 2]) -> Self {
        Self { label, scores }
    }

    /// Log-odds of spam versus ham.
    ///
    /// Positive values favor spam, negative values favor ham.
    /// Magnitude grows with the model's confidence.
    #[inline(always)]
    #[must_use]
    pub fn log_odds(&self) -> f64 {
        self.scores[Label::Spam.as_index()] - self.scores[Label::Ham.as_index()]
    }
}

impl PartialEq for Prediction {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.scores == other.scores
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (log-odds {:+.3})", self.label, self.log_odds())
    }
}
