//! Condition lexicon and matching.
//!
//! The lexicon is an immutable mapping from lowercase surface form to
//! canonical condition name, built once at startup and shared read-only for
//! the life of the process. Matching scans the raw lowercased text for
//! boundary-delimited surface forms and checks annotated token lemmas, then
//! picks the earliest match by scan position, preferring the longest surface
//! form at equal positions.
//!
//! Only one condition is ever reported per query. When a query names several
//! distinct conditions, the first by scan position wins; this is a deliberate
//! single-condition-per-query restriction, not an oversight.

use crate::constants::BUILTIN_SYNONYMS;
use crate::validation::validate_surface_form;
use crate::{CoreResult, QueryError};
use nlq_annotate::{Token, TokenTag};
use nlq_types::ConditionName;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Wire representation of a lexicon configuration document.
///
/// Mirrors the natural authoring shape: canonical name to synonym list.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconWire {
    conditions: BTreeMap<String, Vec<String>>,
}

/// Immutable surface-form to canonical-condition mapping.
#[derive(Clone, Debug)]
pub struct ConditionLexicon {
    surfaces: HashMap<String, ConditionName>,
}

impl ConditionLexicon {
    /// Builds the builtin lexicon.
    ///
    /// The builtin synonym inventory is a fixed table; its validity is pinned
    /// by tests, so construction cannot fail at runtime.
    pub fn builtin() -> Self {
        let mut surfaces = HashMap::new();
        for (surface, canonical) in BUILTIN_SYNONYMS {
            let canonical =
                ConditionName::new(canonical).expect("builtin canonical names are non-empty");
            surfaces.insert((*surface).to_string(), canonical);
        }
        Self { surfaces }
    }

    /// Parses a lexicon from a YAML configuration document.
    ///
    /// The document maps each canonical condition name to its synonym list:
    ///
    /// ```yaml
    /// conditions:
    ///   diabetes:
    ///     - diabetic
    ///     - dm
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the YAML does not match the wire schema or
    /// any entry fails validation.
    pub fn from_yaml(yaml_text: &str) -> CoreResult<Self> {
        let wire: LexiconWire = serde_yaml::from_str(yaml_text)?;
        Self::from_mappings(wire.conditions)
    }

    /// Builds a lexicon from canonical-to-synonyms mappings.
    ///
    /// Surface forms are lowercased and whitespace-normalised before
    /// installation. Every canonical name is installed as its own surface
    /// form, so looking up a canonical name always resolves to itself.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidLexicon`] if the mapping is empty, an
    /// entry fails the surface-form guardrails, or one surface form is
    /// claimed by two different conditions.
    pub fn from_mappings(conditions: BTreeMap<String, Vec<String>>) -> CoreResult<Self> {
        if conditions.is_empty() {
            return Err(QueryError::InvalidLexicon(
                "lexicon defines no conditions".into(),
            ));
        }

        let mut surfaces: HashMap<String, ConditionName> = HashMap::new();

        let mut install = |surface: String, canonical: &ConditionName| -> CoreResult<()> {
            validate_surface_form(&surface)?;
            if let Some(existing) = surfaces.get(&surface) {
                if existing != canonical {
                    return Err(QueryError::InvalidLexicon(format!(
                        "surface form '{}' maps to both '{}' and '{}'",
                        surface, existing, canonical
                    )));
                }
                return Ok(());
            }
            surfaces.insert(surface, canonical.clone());
            Ok(())
        };

        for (canonical_raw, synonyms) in conditions {
            let canonical = ConditionName::new(&canonical_raw)?;
            install(canonical.as_str().to_string(), &canonical)?;
            for synonym in synonyms {
                install(normalise_surface(&synonym), &canonical)?;
            }
        }

        Ok(Self { surfaces })
    }

    /// Number of installed surface forms.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns true when no surface forms are installed.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Finds the canonical condition named in `text`, if any.
    ///
    /// Matching is case-insensitive. Candidates come from boundary-delimited
    /// occurrences of surface forms in the raw text and from annotated token
    /// lemmas; the earliest candidate by scan position wins, with the longest
    /// surface form preferred at equal positions (so `cardiovascular
    /// disease` beats `cardiovascular`). Token offsets are taken relative to
    /// the same text passed here.
    ///
    /// Returns `None` when nothing matches; that is a normal outcome, never
    /// an error.
    pub fn match_condition<I>(&self, text: &str, tokens: I) -> Option<ConditionName>
    where
        I: IntoIterator<Item = Token>,
    {
        let lowered = text.to_lowercase();

        // (start, surface length, canonical); earlier start wins, longer
        // surface breaks ties.
        let mut candidates: Vec<(usize, usize, &ConditionName)> = Vec::new();

        for (surface, canonical) in &self.surfaces {
            if let Some(start) = find_word_bounded(&lowered, surface) {
                candidates.push((start, surface.len(), canonical));
            }
        }

        for token in tokens {
            if token.tag != TokenTag::Word {
                continue;
            }
            if let Some(canonical) = self.surfaces.get(&token.lemma) {
                candidates.push((token.start, token.surface.len(), canonical));
            }
        }

        candidates
            .into_iter()
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
            .map(|(_, _, canonical)| canonical.clone())
    }
}

/// Lowercases and collapses whitespace in a surface form.
fn normalise_surface(form: &str) -> String {
    form.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the first occurrence of `surface` in `text` that is delimited by
/// word boundaries on both sides.
///
/// Boundary checks keep short surface forms honest: `dm` must match the
/// standalone abbreviation, never the middle of `admit`.
fn find_word_bounded(text: &str, surface: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = text[from..].find(surface) {
        let start = from + found;
        let end = start + surface.len();

        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return Some(start);
        }
        // Surface forms are ASCII, so one byte past the match start is a
        // character boundary.
        from = start + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlq_annotate::{Annotator, LexiconAnnotator};

    fn lexicon() -> ConditionLexicon {
        ConditionLexicon::builtin()
    }

    fn match_raw(text: &str) -> Option<ConditionName> {
        lexicon().match_condition(text, std::iter::empty())
    }

    #[test]
    fn builtin_table_passes_validation() {
        for (surface, canonical) in BUILTIN_SYNONYMS {
            validate_surface_form(surface).expect("builtin surface form is valid");
            validate_surface_form(canonical).expect("builtin canonical name is valid");
        }
    }

    #[test]
    fn every_builtin_synonym_resolves_to_its_canonical() {
        for (surface, canonical) in BUILTIN_SYNONYMS {
            let matched = match_raw(surface).expect("builtin synonym must match");
            assert_eq!(matched.as_str(), *canonical, "surface form '{surface}'");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        for (surface, canonical) in BUILTIN_SYNONYMS {
            let matched = match_raw(&surface.to_uppercase()).expect("uppercase form must match");
            assert_eq!(matched.as_str(), *canonical, "surface form '{surface}'");
        }
    }

    #[test]
    fn canonical_names_map_to_themselves() {
        let matched = match_raw("heart disease").expect("canonical must match itself");
        assert_eq!(matched.as_str(), "heart disease");
    }

    #[test]
    fn longest_surface_form_wins_at_equal_position() {
        let matched = match_raw("cardiovascular disease patients").expect("must match");
        assert_eq!(matched.as_str(), "heart disease");
    }

    #[test]
    fn first_condition_by_scan_position_wins() {
        let matched = match_raw("patients with diabetes and cancer").expect("must match");
        assert_eq!(matched.as_str(), "diabetes");

        let matched = match_raw("patients with cancer and diabetes").expect("must match");
        assert_eq!(matched.as_str(), "cancer");
    }

    #[test]
    fn abbreviations_require_word_boundaries() {
        assert!(match_raw("please admit the patient").is_none());
        assert_eq!(match_raw("patient with dm").expect("must match").as_str(), "diabetes");
    }

    #[test]
    fn unknown_text_matches_nothing() {
        assert!(match_raw("show me all patients").is_none());
        assert!(match_raw("").is_none());
    }

    #[test]
    fn token_lemmas_catch_inflected_forms() {
        let annotator = LexiconAnnotator::new().expect("builtin annotator");
        let text = "patients with tumors";
        // Raw scan misses: "tumors" is not a surface form and "tumor" is not
        // boundary-delimited inside it.
        assert!(match_raw(text).is_none());
        let matched = lexicon()
            .match_condition(text, annotator.annotate(text))
            .expect("lemma path must match");
        assert_eq!(matched.as_str(), "cancer");
    }

    #[test]
    fn loads_lexicon_from_yaml() {
        let yaml = r#"conditions:
  migraine:
    - headache
    - head pain
  influenza:
    - flu
"#;
        let lexicon = ConditionLexicon::from_yaml(yaml).expect("valid lexicon document");
        assert_eq!(
            lexicon
                .match_condition("chronic head pain", std::iter::empty())
                .expect("synonym must match")
                .as_str(),
            "migraine"
        );
        // Canonical names always resolve to themselves.
        assert_eq!(
            lexicon
                .match_condition("influenza ward", std::iter::empty())
                .expect("canonical must match")
                .as_str(),
            "influenza"
        );
    }

    #[test]
    fn yaml_lexicon_rejects_unknown_keys() {
        let yaml = r#"conditions:
  migraine: []
extra_key: true
"#;
        let err = ConditionLexicon::from_yaml(yaml).expect_err("unknown key must be rejected");
        assert!(matches!(err, QueryError::LexiconYaml(_)));
    }

    #[test]
    fn yaml_lexicon_rejects_empty_document() {
        let err = ConditionLexicon::from_yaml("conditions: {}\n")
            .expect_err("empty lexicon must be rejected");
        assert!(matches!(err, QueryError::InvalidLexicon(_)));
    }

    #[test]
    fn yaml_lexicon_rejects_conflicting_surface_forms() {
        let yaml = r#"conditions:
  migraine:
    - head pain
  influenza:
    - head pain
"#;
        let err = ConditionLexicon::from_yaml(yaml).expect_err("conflict must be rejected");
        match err {
            QueryError::InvalidLexicon(msg) => assert!(msg.contains("head pain")),
            other => panic!("expected InvalidLexicon error, got {other:?}"),
        }
    }

    #[test]
    fn yaml_lexicon_rejects_invalid_surface_characters() {
        let yaml = r#"conditions:
  migraine:
    - "head_pain"
"#;
        let err = ConditionLexicon::from_yaml(yaml).expect_err("charset must be enforced");
        assert!(matches!(err, QueryError::InvalidLexicon(_)));
    }

    #[test]
    fn yaml_surface_forms_are_normalised() {
        let yaml = r#"conditions:
  migraine:
    - "  Head   Pain "
"#;
        let lexicon = ConditionLexicon::from_yaml(yaml).expect("normalised entry is valid");
        assert!(lexicon
            .match_condition("head pain", std::iter::empty())
            .is_some());
    }
}
