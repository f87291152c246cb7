//! Input validation utilities.
//!
//! This module contains functions for validating externally supplied lexicon
//! entries to ensure they meet safety and correctness requirements before
//! being installed as process-wide lookup tables.

use crate::{CoreResult, QueryError};

/// Validates that a surface form is safe to install in the condition lexicon.
///
/// Surface forms are matched against arbitrary user text and embedded into the
/// rendered query string via their canonical name, so conservative guardrails
/// apply:
/// - Rejects empty or whitespace-only strings
/// - Bounds the length to avoid pathological inputs
/// - Restricts characters to lowercase ASCII letters, digits, spaces, and
///   hyphens (enough for multi-word phrases and forms like `covid-19`)
///
/// # Arguments
///
/// * `surface` - The surface form to validate, already lowercased.
///
/// # Errors
///
/// Returns a `QueryError::InvalidLexicon` if the surface form is invalid.
pub fn validate_surface_form(surface: &str) -> CoreResult<()> {
    const MAX_SURFACE_LEN: usize = 64;

    if surface.trim().is_empty() {
        return Err(QueryError::InvalidLexicon(
            "surface form cannot be empty".into(),
        ));
    }

    if surface.len() > MAX_SURFACE_LEN {
        return Err(QueryError::InvalidLexicon(format!(
            "surface form exceeds maximum length of {} characters",
            MAX_SURFACE_LEN
        )));
    }

    let ok = surface
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b' ' | b'-'));

    if !ok {
        return Err(QueryError::InvalidLexicon(format!(
            "surface form '{}' contains invalid characters (only lowercase alphanumeric, ' ', '-' allowed)",
            surface
        )));
    }

    Ok(())
}
