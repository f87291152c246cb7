//! FHIR wire/boundary support for simulated patient search requests.
//!
//! This crate provides **wire models** and **format/translation helpers** for
//! the JSON-shaped query result produced by the natural-language pipeline:
//! - FHIR search-parameter prefixes and ordered parameter rendering
//! - the `QueryResult` wire model and its strict parse/render facade
//!
//! This crate focuses on:
//! - FHIR semantic alignment (without FHIR JSON/REST transport)
//! - serialisation/deserialisation
//! - translation between domain primitives and the wire structs
//!
//! Requests rendered here are simulated: they are never transmitted, only
//! constructed deterministically from detected filters.

pub mod params;
pub mod request;

// Re-export facades
pub use request::PatientQuery;

// Re-export public wire and parameter types
pub use params::{Prefix, SearchParam};
pub use request::{QueryFilters, QueryResult};

/// Errors returned by the `fhir-search` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`SearchError`].
pub type SearchResult<T> = Result<T, SearchError>;
