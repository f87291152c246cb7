//! Shared domain primitives for the natural-language patient query pipeline.
//!
//! This crate defines the validated types that cross crate boundaries:
//! - [`ConditionName`]: a normalised canonical condition name
//! - [`AgePattern`] / [`AgeCategory`]: the structured age-predicate model
//!
//! These types carry no I/O, no lookup tables, and no matching logic; they only
//! guarantee their own invariants once constructed.

/// Errors that can occur when creating validated name types.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    /// The input text was empty or contained only whitespace
    #[error("Name cannot be empty")]
    Empty,
}

/// A normalised canonical condition name.
///
/// This type wraps a `String` and guarantees the contained name is lowercase,
/// trimmed, and has internal whitespace collapsed to single spaces. Two inputs
/// that differ only in case or spacing construct equal `ConditionName`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionName(String);

impl ConditionName {
    /// Creates a new `ConditionName` from the given input.
    ///
    /// The input is lowercased, trimmed, and internal whitespace runs are
    /// collapsed to single spaces. If nothing remains after normalisation,
    /// an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(ConditionName)` if the normalised input is non-empty,
    /// or `Err(NameError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, NameError> {
        let normalised = input
            .as_ref()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if normalised.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(normalised))
    }

    /// Returns the inner name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConditionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ConditionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for ConditionName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ConditionName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ConditionName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A named age group with a fixed numeric binding.
///
/// Each category resolves to exactly one numeric [`AgePattern`]; the bindings
/// are part of the public contract and pinned by tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgeCategory {
    /// Under 2 years.
    Infant,
    /// Under 18 years.
    Child,
    /// 16 to 35 years.
    Youth,
    /// 18 to 65 years.
    Adult,
    /// Over 65 years.
    Senior,
}

impl AgeCategory {
    /// The fixed numeric pattern this category resolves to.
    ///
    /// Never returns [`AgePattern::Category`].
    pub fn pattern(self) -> AgePattern {
        match self {
            AgeCategory::Infant => AgePattern::LessThan(2),
            AgeCategory::Child => AgePattern::LessThan(18),
            AgeCategory::Youth => AgePattern::Between(16, 35),
            AgeCategory::Adult => AgePattern::Between(18, 65),
            AgeCategory::Senior => AgePattern::GreaterThan(65),
        }
    }

    /// Lowercase label for display and logging.
    pub fn label(self) -> &'static str {
        match self {
            AgeCategory::Infant => "infant",
            AgeCategory::Child => "child",
            AgeCategory::Youth => "youth",
            AgeCategory::Adult => "adult",
            AgeCategory::Senior => "senior",
        }
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A structured age constraint, independent of its textual phrasing.
///
/// At most one `AgePattern` is produced per query. `Between` holds
/// `low <= high`; use [`AgePattern::between`] to get that normalisation for
/// free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgePattern {
    /// Strictly older than the given age.
    GreaterThan(u32),
    /// Strictly younger than the given age.
    LessThan(u32),
    /// Inclusive age range, low <= high.
    Between(u32, u32),
    /// A named age group bound to a fixed numeric pattern.
    Category(AgeCategory),
}

impl AgePattern {
    /// Builds a `Between` pattern, swapping the bounds when given in the
    /// wrong order. Swapped input is normalised, not rejected.
    pub fn between(a: u32, b: u32) -> Self {
        if a <= b {
            AgePattern::Between(a, b)
        } else {
            AgePattern::Between(b, a)
        }
    }

    /// Resolves a category to its fixed numeric pattern; numeric patterns
    /// are returned unchanged.
    ///
    /// The result is never [`AgePattern::Category`].
    pub fn numeric(self) -> AgePattern {
        match self {
            AgePattern::Category(category) => category.pattern(),
            other => other,
        }
    }
}
