//! Pre-trained model layer.
//!
//! The model half of the engine: a TF-IDF vectorizer mapping normalized
//! text to a sparse feature vector, and a multinomial naive Bayes
//! classifier mapping that vector to a ham/spam label. Both are built
//! from parameters fixed at training time and loaded once from read-only
//! JSON artifacts; nothing here learns or mutates after construction.

pub mod artifact;
pub mod classifier;
pub mod vectorizer;

pub use artifact::{load_classifier, load_vectorizer, ArtifactError};
pub use classifier::MultinomialNb;
pub use vectorizer::{SparseVector, TfidfVectorizer};
