//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. The intent is to keep lookup
//! tables immutable after initialisation so concurrent callers can share them
//! without coordination, and to keep document loading out of request
//! handling.

use crate::condition::ConditionLexicon;
use crate::CoreResult;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    lexicon: ConditionLexicon,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with the given condition lexicon.
    pub fn new(lexicon: ConditionLexicon) -> Self {
        Self { lexicon }
    }

    /// Create a `CoreConfig` backed by the builtin condition lexicon.
    pub fn builtin() -> Self {
        Self::new(ConditionLexicon::builtin())
    }

    pub fn lexicon(&self) -> &ConditionLexicon {
        &self.lexicon
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve the condition lexicon from an optional override document.
///
/// If `override_yaml` is provided, it must be a valid lexicon document and is
/// validated strictly; a malformed override is a startup error, not something
/// to silently fall back from. Otherwise the builtin lexicon is used.
pub fn resolve_lexicon(override_yaml: Option<&str>) -> CoreResult<ConditionLexicon> {
    match override_yaml {
        Some(yaml_text) => ConditionLexicon::from_yaml(yaml_text),
        None => Ok(ConditionLexicon::builtin()),
    }
}
