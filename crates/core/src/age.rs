//! Age-phrase parsing.
//!
//! Free-text age constraints come in a handful of phrase shapes. Each shape
//! is a pure predicate+extractor pair compiled once into an ordered rule
//! table; the table order is the precedence contract, evaluated regardless
//! of where a phrase sits in the text:
//!
//! 1. explicit numeric ranges (`between 20 and 40`, `30 to 50 years`)
//! 2. explicit comparisons (`over 50`, `younger than 30`, `65+`)
//! 3. category keywords (`children`, `elderly`, ...)
//!
//! The first rule whose pattern matches wins, and at most one age predicate
//! is produced per query. Ages are only read from literal digits; written-out
//! numbers ("fifty") are not parsed.

use nlq_types::{AgeCategory, AgePattern};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A compiled phrase pattern with its extractor.
struct AgeRule {
    regex: Regex,
    extract: fn(&Captures) -> Option<AgePattern>,
}

/// Ordered rule table; the order is load-bearing (see module docs).
static AGE_RULES: LazyLock<Vec<AgeRule>> = LazyLock::new(|| {
    vec![
        // Explicit numeric ranges bind tightest, wherever they appear.
        rule(r"(?i)\bbetween (\d+) and (\d+)\b", |caps| {
            Some(AgePattern::between(num(caps, 1)?, num(caps, 2)?))
        }),
        rule(r"(?i)\b(\d+) to (\d+) years?\b", |caps| {
            Some(AgePattern::between(num(caps, 1)?, num(caps, 2)?))
        }),
        // Explicit comparisons.
        rule(r"(?i)\b(?:over|above|older than) (\d+)\b", |caps| {
            Some(AgePattern::GreaterThan(num(caps, 1)?))
        }),
        rule(r"(?i)\b(?:under|below|younger than) (\d+)\b", |caps| {
            Some(AgePattern::LessThan(num(caps, 1)?))
        }),
        rule(r"(?i)\b(\d+)\+", |caps| {
            Some(AgePattern::GreaterThan(num(caps, 1)?))
        }),
        // Category keywords. `youth` forms sit ahead of `adult` forms so
        // "young adults" resolves to the youth band.
        rule(r"(?i)\b(?:elderly|seniors?)\b", |_| {
            Some(AgePattern::Category(AgeCategory::Senior))
        }),
        rule(r"(?i)\b(?:children|child|kids?|p(?:a)?ediatric)\b", |_| {
            Some(AgePattern::Category(AgeCategory::Child))
        }),
        rule(r"(?i)\b(?:youth|young adults?|adolescents?)\b", |_| {
            Some(AgePattern::Category(AgeCategory::Youth))
        }),
        rule(r"(?i)\b(?:adults?|middle[ -]?aged?)\b", |_| {
            Some(AgePattern::Category(AgeCategory::Adult))
        }),
        rule(r"(?i)\b(?:infants?|babies|newborns?)\b", |_| {
            Some(AgePattern::Category(AgeCategory::Infant))
        }),
    ]
});

fn rule(regex_str: &str, extract: fn(&Captures) -> Option<AgePattern>) -> AgeRule {
    AgeRule {
        regex: Regex::new(regex_str).expect("Invalid age rule pattern"),
        extract,
    }
}

/// Parses a capture group as an age; digit runs that do not fit are treated
/// as no match, never as an error.
fn num(caps: &Captures, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// Extracts the age predicate from `text`, if any phrase matches.
///
/// Case-insensitive; returns `None` when no phrase shape is present, which is
/// a normal outcome.
pub fn parse_age_filter(text: &str) -> Option<AgePattern> {
    AGE_RULES.iter().find_map(|rule| {
        rule.regex
            .captures(text)
            .and_then(|caps| (rule.extract)(&caps))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_between_range() {
        assert_eq!(
            parse_age_filter("patients between 20 and 40"),
            Some(AgePattern::Between(20, 40))
        );
    }

    #[test]
    fn between_range_normalises_swapped_bounds() {
        assert_eq!(
            parse_age_filter("between 50 and 30"),
            Some(AgePattern::Between(30, 50))
        );
    }

    #[test]
    fn parses_to_years_range() {
        assert_eq!(
            parse_age_filter("aged 30 to 50 years"),
            Some(AgePattern::Between(30, 50))
        );
        assert_eq!(
            parse_age_filter("30 to 50 year olds"),
            Some(AgePattern::Between(30, 50))
        );
        // Without the years suffix this shape is not an age phrase.
        assert_eq!(parse_age_filter("rooms 30 to 50"), None);
    }

    #[test]
    fn parses_greater_than_comparisons() {
        assert_eq!(
            parse_age_filter("patients over 50"),
            Some(AgePattern::GreaterThan(50))
        );
        assert_eq!(
            parse_age_filter("above 40"),
            Some(AgePattern::GreaterThan(40))
        );
        assert_eq!(
            parse_age_filter("older than 65"),
            Some(AgePattern::GreaterThan(65))
        );
        assert_eq!(parse_age_filter("65+"), Some(AgePattern::GreaterThan(65)));
    }

    #[test]
    fn parses_less_than_comparisons() {
        assert_eq!(
            parse_age_filter("patients under 30"),
            Some(AgePattern::LessThan(30))
        );
        assert_eq!(parse_age_filter("below 18"), Some(AgePattern::LessThan(18)));
        assert_eq!(
            parse_age_filter("younger than 25"),
            Some(AgePattern::LessThan(25))
        );
    }

    #[test]
    fn parses_category_keywords() {
        assert_eq!(
            parse_age_filter("elderly patients"),
            Some(AgePattern::Category(AgeCategory::Senior))
        );
        assert_eq!(
            parse_age_filter("children with asthma"),
            Some(AgePattern::Category(AgeCategory::Child))
        );
        assert_eq!(
            parse_age_filter("kids in the ward"),
            Some(AgePattern::Category(AgeCategory::Child))
        );
        assert_eq!(
            parse_age_filter("adolescents"),
            Some(AgePattern::Category(AgeCategory::Youth))
        );
        assert_eq!(
            parse_age_filter("adults with depression"),
            Some(AgePattern::Category(AgeCategory::Adult))
        );
        assert_eq!(
            parse_age_filter("middle-aged patients"),
            Some(AgePattern::Category(AgeCategory::Adult))
        );
        assert_eq!(
            parse_age_filter("infants with respiratory issues"),
            Some(AgePattern::Category(AgeCategory::Infant))
        );
        assert_eq!(
            parse_age_filter("newborns"),
            Some(AgePattern::Category(AgeCategory::Infant))
        );
    }

    #[test]
    fn young_adults_resolve_to_the_youth_band() {
        assert_eq!(
            parse_age_filter("young adults who have cancer"),
            Some(AgePattern::Category(AgeCategory::Youth))
        );
    }

    #[test]
    fn ranges_outrank_comparisons_and_categories() {
        // The range phrase wins even when a comparison appears first in the
        // text.
        assert_eq!(
            parse_age_filter("over 30 but between 40 and 60"),
            Some(AgePattern::Between(40, 60))
        );
        assert_eq!(
            parse_age_filter("children between 5 and 10"),
            Some(AgePattern::Between(5, 10))
        );
    }

    #[test]
    fn comparisons_outrank_categories() {
        assert_eq!(
            parse_age_filter("seniors over 70"),
            Some(AgePattern::GreaterThan(70))
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            parse_age_filter("BETWEEN 20 AND 40"),
            Some(AgePattern::Between(20, 40))
        );
        assert_eq!(
            parse_age_filter("ELDERLY"),
            Some(AgePattern::Category(AgeCategory::Senior))
        );
    }

    #[test]
    fn written_out_numbers_are_not_parsed() {
        assert_eq!(parse_age_filter("over fifty"), None);
    }

    #[test]
    fn unparseable_digit_runs_are_no_match() {
        assert_eq!(parse_age_filter("over 99999999999999999999"), None);
    }

    #[test]
    fn plain_text_has_no_age() {
        assert_eq!(parse_age_filter("show me all patients"), None);
        assert_eq!(parse_age_filter(""), None);
    }
}
