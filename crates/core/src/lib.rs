//! # NLQ Core
//!
//! Core query-interpretation pipeline for the natural-language patient query
//! system.
//!
//! This crate turns a free-text clinical query ("Show me all diabetic
//! patients over 50") into a structured filter set and a simulated
//! wire-level request line, in four stages:
//! - annotation (external collaborator, injected at construction)
//! - condition matching against an immutable synonym lexicon
//! - age-phrase parsing through an ordered rule table
//! - deterministic query construction (in the `fhir-search` crate)
//!
//! Every stage is a pure function of its input plus static lookup tables;
//! per-query processing never fails. The only failure class is startup
//! misconfiguration (annotator lexicon, lexicon override document).
//!
//! **No I/O concerns**: File loading, terminal output, and process wiring
//! belong in `nlq-cli`.

pub mod age;
pub mod condition;
pub mod config;
pub mod constants;
pub mod error;
pub mod intent;
pub mod processor;
pub mod validation;

pub use condition::ConditionLexicon;
pub use config::{resolve_lexicon, CoreConfig};
pub use error::{CoreResult, QueryError};
pub use intent::QueryIntent;
pub use processor::QueryProcessor;

// Re-export the wire types callers receive from `process`.
pub use fhir_search::{PatientQuery, QueryFilters, QueryResult};
