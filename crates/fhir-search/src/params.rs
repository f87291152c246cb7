//! FHIR search parameters and age-predicate rendering.
//!
//! Responsibilities:
//! - Define the search-parameter prefixes used for numeric comparisons
//! - Translate age predicates into the human-readable filter string and the
//!   ordered wire parameters
//! - Render a full simulated request line from an ordered parameter list
//!
//! Notes:
//! - Parameter order is part of the contract: callers assemble age
//!   parameter(s) before the condition parameter so identical input always
//!   renders an identical request line.

use nlq_types::AgePattern;

/// Resource path for simulated patient requests.
pub const PATIENT_RESOURCE: &str = "Patient";

/// FHIR search-parameter comparison prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefix {
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Greater than or equal.
    Ge,
    /// Less than or equal.
    Le,
}

impl Prefix {
    /// Convert to FHIR wire format string.
    pub fn to_wire(self) -> &'static str {
        match self {
            Prefix::Gt => "gt",
            Prefix::Lt => "lt",
            Prefix::Ge => "ge",
            Prefix::Le => "le",
        }
    }

    /// Parse from FHIR wire format string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "gt" => Some(Prefix::Gt),
            "lt" => Some(Prefix::Lt),
            "ge" => Some(Prefix::Ge),
            "le" => Some(Prefix::Le),
            _ => None,
        }
    }
}

/// One `name=value` search parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParam {
    /// Parameter name, for example `age` or `condition`.
    pub name: &'static str,
    /// Parameter value, including any comparison prefix.
    pub value: String,
}

impl SearchParam {
    /// Creates a plain parameter.
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Creates a numeric comparison parameter, for example `age=gt50`.
    pub fn comparison(name: &'static str, prefix: Prefix, value: u32) -> Self {
        Self {
            name,
            value: format!("{}{}", prefix.to_wire(), value),
        }
    }
}

impl std::fmt::Display for SearchParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Renders the human-readable filter string for an age predicate.
///
/// Categories render exactly as their fixed numeric pattern.
pub fn age_filter_string(pattern: &AgePattern) -> String {
    match pattern.numeric() {
        AgePattern::GreaterThan(age) => format!(">{age}"),
        AgePattern::LessThan(age) => format!("<{age}"),
        AgePattern::Between(low, high) => format!("{low}-{high}"),
        // numeric() never yields a category.
        AgePattern::Category(category) => age_filter_string(&category.pattern()),
    }
}

/// Renders the ordered wire parameters for an age predicate.
///
/// A range expands to two parameters (`age=geLOW`, `age=leHIGH`, in that
/// order); one-sided bounds expand to a single parameter.
pub fn age_search_params(pattern: &AgePattern) -> Vec<SearchParam> {
    match pattern.numeric() {
        AgePattern::GreaterThan(age) => {
            vec![SearchParam::comparison("age", Prefix::Gt, age)]
        }
        AgePattern::LessThan(age) => {
            vec![SearchParam::comparison("age", Prefix::Lt, age)]
        }
        AgePattern::Between(low, high) => vec![
            SearchParam::comparison("age", Prefix::Ge, low),
            SearchParam::comparison("age", Prefix::Le, high),
        ],
        AgePattern::Category(category) => age_search_params(&category.pattern()),
    }
}

/// Renders the simulated request line for an ordered parameter list.
///
/// With no parameters this is the bare resource path; that case is a normal
/// outcome, not a failure.
pub fn render_request(params: &[SearchParam]) -> String {
    if params.is_empty() {
        return format!("GET /{PATIENT_RESOURCE}");
    }
    let query = params
        .iter()
        .map(SearchParam::to_string)
        .collect::<Vec<_>>()
        .join("&");
    format!("GET /{PATIENT_RESOURCE}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlq_types::AgeCategory;

    #[test]
    fn prefix_wire_round_trip() {
        for prefix in [Prefix::Gt, Prefix::Lt, Prefix::Ge, Prefix::Le] {
            assert_eq!(Prefix::from_wire(prefix.to_wire()), Some(prefix));
        }
        assert_eq!(Prefix::from_wire("eq"), None);
    }

    #[test]
    fn one_sided_bounds_render_single_parameter() {
        assert_eq!(age_filter_string(&AgePattern::GreaterThan(50)), ">50");
        assert_eq!(
            age_search_params(&AgePattern::GreaterThan(50))
                .iter()
                .map(SearchParam::to_string)
                .collect::<Vec<_>>(),
            vec!["age=gt50"]
        );

        assert_eq!(age_filter_string(&AgePattern::LessThan(18)), "<18");
        assert_eq!(
            age_search_params(&AgePattern::LessThan(18))
                .iter()
                .map(SearchParam::to_string)
                .collect::<Vec<_>>(),
            vec!["age=lt18"]
        );
    }

    #[test]
    fn range_renders_two_ordered_parameters() {
        let pattern = AgePattern::between(30, 50);
        assert_eq!(age_filter_string(&pattern), "30-50");
        assert_eq!(
            age_search_params(&pattern)
                .iter()
                .map(SearchParam::to_string)
                .collect::<Vec<_>>(),
            vec!["age=ge30", "age=le50"]
        );
    }

    #[test]
    fn swapped_range_renders_identically() {
        assert_eq!(
            age_search_params(&AgePattern::between(50, 30)),
            age_search_params(&AgePattern::between(30, 50))
        );
        assert_eq!(age_filter_string(&AgePattern::between(50, 30)), "30-50");
    }

    #[test]
    fn categories_render_as_their_fixed_bounds() {
        assert_eq!(
            age_filter_string(&AgePattern::Category(AgeCategory::Child)),
            "<18"
        );
        assert_eq!(
            age_search_params(&AgePattern::Category(AgeCategory::Youth))
                .iter()
                .map(SearchParam::to_string)
                .collect::<Vec<_>>(),
            vec!["age=ge16", "age=le35"]
        );
    }

    #[test]
    fn empty_parameter_list_renders_bare_resource() {
        assert_eq!(render_request(&[]), "GET /Patient");
    }

    #[test]
    fn parameters_join_in_given_order() {
        let params = vec![
            SearchParam::comparison("age", Prefix::Gt, 50),
            SearchParam::new("condition", "diabetes"),
        ];
        assert_eq!(
            render_request(&params),
            "GET /Patient?age=gt50&condition=diabetes"
        );
    }
}
