//! Tokenizer/annotator boundary for the natural-language query pipeline.
//!
//! The query pipeline treats linguistic annotation as an external collaborator:
//! something that turns raw text into a lazy, finite, non-restartable sequence
//! of tokens carrying a lemma and a coarse tag. The pipeline consumes that
//! sequence read-only and never configures or retrains the annotator.
//!
//! This crate provides:
//! - The [`Annotator`] trait, the capability injected into the pipeline at
//!   construction time so tests can substitute a stub.
//! - [`LexiconAnnotator`], the default rule-based implementation: a
//!   word/number/punctuation tokenizer with lemmatisation via an
//!   irregular-form lexicon plus suffix rules.
//!
//! Constructing a [`LexiconAnnotator`] validates its lexicon and is the one
//! place annotation can fail; per-token work is infallible.

mod annotator;

// Re-export public types
pub use annotator::{Annotator, LexiconAnnotator, Token, TokenTag};

/// Error type for annotator construction.
#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    /// The lemma lexicon contained no entries
    #[error("lemma lexicon is empty")]
    EmptyLexicon,
    /// A lexicon entry had an empty surface or lemma form
    #[error("lemma lexicon entry has an empty surface or lemma form")]
    EmptyEntry,
    /// A lexicon entry was not in lowercase form
    #[error("lemma lexicon entry '{0}' must be lowercase")]
    UppercaseEntry(String),
}

/// Result type for annotator operations.
pub type AnnotateResult<T> = Result<T, AnnotateError>;
