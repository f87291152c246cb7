//! Query intent detection.
//!
//! A shallow keyword classification of what the caller wants done with the
//! matching patients. Intent never changes the interpreted filter set or the
//! rendered request line; it is surfaced alongside them for callers that want
//! to route queries.

/// What the query asks to do with the matching patients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryIntent {
    /// Retrieve matching records.
    Search,
    /// Count matching records.
    Count,
    /// Modify matching records.
    Update,
}

impl QueryIntent {
    /// Lowercase label for display and logging.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryIntent::Search => "search",
            QueryIntent::Count => "count",
            QueryIntent::Update => "update",
        }
    }
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const SEARCH_KEYWORDS: &[&str] = &["show", "list", "find", "get", "retrieve", "display"];
const COUNT_KEYWORDS: &[&str] = &["count", "how many", "number of"];
const UPDATE_KEYWORDS: &[&str] = &["update", "modify", "change"];

/// Classifies the intent of a query.
///
/// Keyword classes are checked in a fixed order (search, count, update) and
/// anything unrecognised defaults to search, so this is total over all
/// inputs.
pub fn detect_intent(text: &str) -> QueryIntent {
    let lowered = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    if contains_any(SEARCH_KEYWORDS) {
        QueryIntent::Search
    } else if contains_any(COUNT_KEYWORDS) {
        QueryIntent::Count
    } else if contains_any(UPDATE_KEYWORDS) {
        QueryIntent::Update
    } else {
        QueryIntent::Search
    }
}
