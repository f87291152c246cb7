//! Simulated patient-request wire model and translation helpers.
//!
//! Responsibilities:
//! - Define the strict wire model for the JSON-shaped query result
//! - Build the result deterministically from detected filters
//! - Serialise/deserialise with strict validation
//!
//! Notes:
//! - `filters` is always present and serialises as an empty object when
//!   nothing was detected; absent filters are omitted keys, never null.
//! - The request line reflects exactly the keys present in `filters`, with
//!   age parameter(s) always ahead of the condition parameter.

use crate::params::{
    age_filter_string, age_search_params, render_request, SearchParam, PATIENT_RESOURCE,
};
use crate::SearchError;
use nlq_types::{AgePattern, ConditionName};
use serde::{Deserialize, Serialize};

/// Detected filters for a patient query.
///
/// Keys are omitted from the serialised form when absent; the containing
/// object itself is always serialised.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QueryFilters {
    /// Human-readable age filter, for example `>50` or `30-50`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    /// Canonical condition name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl QueryFilters {
    /// Returns true when no filter was detected.
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.condition.is_none()
    }
}

/// Wire model of one interpreted query.
///
/// This is the exact structure that will be serialised to/from JSON.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QueryResult {
    /// Target resource; always `Patient`.
    pub resource: String,

    /// Detected filters, possibly empty.
    pub filters: QueryFilters,

    /// Simulated request line, for example
    /// `GET /Patient?age=gt50&condition=diabetes`.
    pub fhir_request: String,
}

/// Patient query operations.
///
/// This is a zero-sized type used for namespacing query construction and
/// wire translation. All methods are associated functions.
pub struct PatientQuery;

impl PatientQuery {
    /// Builds a query result from the detected condition and age predicate.
    ///
    /// Absent inputs are omitted from `filters` entirely. The request line is
    /// assembled from the ordered parameter list: age parameter(s) first,
    /// then condition, so identical input always renders identical output.
    /// With neither input this still succeeds, producing empty filters and
    /// the bare resource path.
    pub fn build(condition: Option<&ConditionName>, age: Option<&AgePattern>) -> QueryResult {
        let mut filters = QueryFilters::default();
        let mut params: Vec<SearchParam> = Vec::new();

        if let Some(age) = age {
            filters.age = Some(age_filter_string(age));
            params.extend(age_search_params(age));
        }

        if let Some(condition) = condition {
            filters.condition = Some(condition.as_str().to_string());
            params.push(SearchParam::new("condition", condition.as_str()));
        }

        QueryResult {
            resource: PATIENT_RESOURCE.to_string(),
            filters,
            fhir_request: render_request(&params),
        }
    }

    /// Renders a query result as pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if serialisation fails.
    pub fn render(result: &QueryResult) -> Result<String, SearchError> {
        serde_json::to_string_pretty(result)
            .map_err(|e| SearchError::Translation(format!("Failed to serialise query: {e}")))
    }

    /// Parses a query result from JSON text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `filters.age`) to the failing field when the JSON does not match the
    /// wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if:
    /// - the JSON does not represent a valid query result,
    /// - any field has an unexpected type,
    /// - any unknown keys are present (due to `#[serde(deny_unknown_fields)]`),
    /// - resource is not "Patient".
    pub fn parse(json_text: &str) -> Result<QueryResult, SearchError> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let result = match serde_path_to_error::deserialize::<_, QueryResult>(&mut deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(SearchError::Translation(format!(
                    "Query schema mismatch at {path}: {source}"
                )));
            }
        };

        if result.resource != PATIENT_RESOURCE {
            return Err(SearchError::InvalidInput(format!(
                "Expected resource '{PATIENT_RESOURCE}', got '{}'",
                result.resource
            )));
        }

        Ok(result)
    }
}
