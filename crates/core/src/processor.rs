//! Query pipeline orchestration.
//!
//! [`QueryProcessor`] wires the annotator, the condition lexicon, and the
//! age-rule table into a single `process` call. Processing is synchronous,
//! stateless per call, and total: every string input, including empty or
//! unrecognised text, produces a well-formed result. Failure is only
//! possible at construction time.

use crate::age;
use crate::config::CoreConfig;
use crate::intent::{self, QueryIntent};
use crate::CoreResult;
use fhir_search::{PatientQuery, QueryResult};
use nlq_annotate::{Annotator, LexiconAnnotator};

/// Natural-language query interpretation service.
///
/// The annotator is an injected capability, so tests can substitute a stub;
/// the lookup tables come from [`CoreConfig`] and are immutable after
/// construction, which makes a single processor safe to share across
/// concurrent callers.
pub struct QueryProcessor {
    config: CoreConfig,
    annotator: Box<dyn Annotator + Send + Sync>,
}

impl QueryProcessor {
    /// Creates a processor from resolved configuration and an annotator.
    pub fn new(config: CoreConfig, annotator: Box<dyn Annotator + Send + Sync>) -> Self {
        Self { config, annotator }
    }

    /// Creates a processor with the builtin lexicon and default annotator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::QueryError`] if the default annotator fails to
    /// initialise. This is the startup failure class; per-query processing
    /// never fails.
    pub fn with_defaults() -> CoreResult<Self> {
        let annotator = LexiconAnnotator::new()?;
        Ok(Self::new(CoreConfig::builtin(), Box::new(annotator)))
    }

    /// Interprets a free-text query into a structured result.
    ///
    /// The input is lowercased once so any-case input produces output
    /// identical to its lowercase form. Blank or unrecognised input yields
    /// empty filters and the bare resource path; no input raises an error.
    pub fn process(&self, query: &str) -> QueryResult {
        let lowered = query.trim().to_lowercase();

        let condition = self
            .config
            .lexicon()
            .match_condition(&lowered, self.annotator.annotate(&lowered));
        let age = age::parse_age_filter(&lowered);

        tracing::debug!(
            "interpreted query: condition={:?}, age={:?}",
            condition.as_ref().map(|c| c.as_str()),
            age
        );

        PatientQuery::build(condition.as_ref(), age.as_ref())
    }

    /// Classifies what the query asks to do with the matching patients.
    ///
    /// Intent never changes the interpreted filters; see [`crate::intent`].
    pub fn intent(&self, query: &str) -> QueryIntent {
        intent::detect_intent(query)
    }
}
