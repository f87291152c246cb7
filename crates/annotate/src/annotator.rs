//! Internal implementation of the rule-based annotator.
//!
//! This module contains the token model, the annotator capability trait, and
//! the default lexicon-backed implementation used outside of tests.

use crate::{AnnotateError, AnnotateResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coarse token tag.
///
/// Downstream matching only needs to distinguish words (candidate condition
/// terms), numbers (candidate ages), and punctuation; finer-grained tags would
/// go unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTag {
    /// Alphabetic run.
    Word,
    /// Digit run.
    Number,
    /// Any other non-whitespace character.
    Punctuation,
}

/// One annotated token.
///
/// `surface` preserves the original spelling; `lemma` is the lowercased base
/// form used for dictionary lookups; `start` is the byte offset of the token
/// in the annotated text, used to order matches by scan position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text exactly as it appeared in the input.
    pub surface: String,
    /// Lowercased base form of the token.
    pub lemma: String,
    /// Coarse tag for the token.
    pub tag: TokenTag,
    /// Byte offset of the token in the annotated text.
    pub start: usize,
}

/// Capability for turning raw text into an annotated token stream.
///
/// Implementations are injected into the query pipeline at construction time,
/// which keeps the linguistic machinery substitutable with a stub in tests.
pub trait Annotator {
    /// Annotates `text`, producing a lazy, finite token stream.
    ///
    /// The stream is produced on demand and cannot be restarted; obtain a
    /// fresh stream for each pass over the text.
    fn annotate<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token> + 'a>;
}

/// Irregular base forms the suffix rules cannot derive.
const BUILTIN_LEMMAS: &[(&str, &str)] = &[
    ("children", "child"),
    ("women", "woman"),
    ("men", "man"),
    ("people", "person"),
    // Invariant form: stripping the final 's' would corrupt it.
    ("diabetes", "diabetes"),
];

/// Default rule-based annotator.
///
/// Tokenises on word/number/punctuation boundaries and lemmatises words via an
/// irregular-form lexicon plus suffix rules. Construction validates the
/// lexicon; a misconfigured lexicon is a fatal startup error, reported once
/// and never retried.
#[derive(Clone, Debug)]
pub struct LexiconAnnotator {
    lemmas: HashMap<String, String>,
}

impl LexiconAnnotator {
    /// Creates an annotator backed by the builtin lemma lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError`] if the builtin lexicon fails validation.
    pub fn new() -> AnnotateResult<Self> {
        Self::from_entries(
            BUILTIN_LEMMAS
                .iter()
                .map(|(surface, lemma)| (surface.to_string(), lemma.to_string())),
        )
    }

    /// Creates an annotator from explicit `(surface, lemma)` lexicon entries.
    ///
    /// Entries must be non-empty and lowercase; the lexicon must contain at
    /// least one entry.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::EmptyLexicon`], [`AnnotateError::EmptyEntry`],
    /// or [`AnnotateError::UppercaseEntry`] on a misconfigured lexicon.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> AnnotateResult<Self> {
        let mut lemmas = HashMap::new();
        for (surface, lemma) in entries {
            let surface = surface.trim().to_string();
            let lemma = lemma.trim().to_string();
            if surface.is_empty() || lemma.is_empty() {
                return Err(AnnotateError::EmptyEntry);
            }
            for form in [&surface, &lemma] {
                if form.chars().any(|c| c.is_uppercase()) {
                    return Err(AnnotateError::UppercaseEntry(form.clone()));
                }
            }
            lemmas.insert(surface, lemma);
        }
        if lemmas.is_empty() {
            return Err(AnnotateError::EmptyLexicon);
        }
        Ok(Self { lemmas })
    }

    /// Lowercases and lemmatises a single word.
    fn lemma_of(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        if let Some(lemma) = self.lemmas.get(&lowered) {
            return lemma.clone();
        }
        if let Some(stem) = lowered.strip_suffix("ies") {
            if stem.len() > 1 {
                return format!("{stem}y");
            }
        }
        if lowered.len() > 3
            && lowered.ends_with('s')
            && !lowered.ends_with("ss")
            && !lowered.ends_with("us")
            && !lowered.ends_with("is")
        {
            return lowered[..lowered.len() - 1].to_string();
        }
        lowered
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Token> + 'a> {
        Box::new(Tokens {
            annotator: self,
            text,
            pos: 0,
        })
    }
}

/// Lazy token stream over a borrowed text.
struct Tokens<'a> {
    annotator: &'a LexiconAnnotator,
    text: &'a str,
    pos: usize,
}

/// Classifies a character, or `None` for whitespace (never part of a token).
fn char_class(c: char) -> Option<TokenTag> {
    if c.is_whitespace() {
        None
    } else if c.is_alphabetic() {
        Some(TokenTag::Word)
    } else if c.is_ascii_digit() {
        Some(TokenTag::Number)
    } else {
        Some(TokenTag::Punctuation)
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();

        // Skip to the start of the next token.
        let (start_in_rest, first, tag) = loop {
            let (offset, c) = chars.next()?;
            if let Some(tag) = char_class(c) {
                break (offset, c, tag);
            }
        };

        // Consume the run of same-class characters; punctuation tokens are
        // always a single character.
        let mut end_in_rest = start_in_rest + first.len_utf8();
        if tag != TokenTag::Punctuation {
            for (offset, c) in chars {
                if char_class(c) == Some(tag) {
                    end_in_rest = offset + c.len_utf8();
                } else {
                    break;
                }
            }
        }

        let start = self.pos + start_in_rest;
        let end = self.pos + end_in_rest;
        self.pos = end;

        let surface = self.text[start..end].to_string();
        let lemma = match tag {
            TokenTag::Word => self.annotator.lemma_of(&surface),
            _ => surface.clone(),
        };

        Some(Token {
            surface,
            lemma,
            tag,
            start,
        })
    }
}
