//! Data model for fauxlizer tables.
//!
//! A [`Record`] is one validated row. It is constructed only by
//! [`RecordValidator`](crate::validator::RecordValidator); once built it is
//! never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four required column names, in canonical order.
pub const REQUIRED_HEADERS: [&str; 4] = [
    "experiment_name",
    "sample_id",
    "fauxness",
    "category_guess",
];

/// Classification label for a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGuess {
    Real,
    Fake,
    Ambiguous,
}

impl CategoryGuess {
    /// Exact, case-sensitive parse. `"Real"` and `"FAKE"` do not match.
    pub fn parse_exact(value: &str) -> Option<Self> {
        match value {
            "real" => Some(Self::Real),
            "fake" => Some(Self::Fake),
            "ambiguous" => Some(Self::Ambiguous),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Fake => "fake",
            Self::Ambiguous => "ambiguous",
        }
    }
}

impl fmt::Display for CategoryGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated row of a fauxlizer table.
///
/// Numeric fields stay numeric through serialization: `sample_id` is a JSON
/// integer and `fauxness` a JSON number, never strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Non-empty experiment label.
    pub experiment_name: String,

    /// Non-negative sample identifier. Uniqueness across rows is not
    /// enforced.
    pub sample_id: i64,

    /// Classification score in the closed interval [0.0, 1.0].
    pub fauxness: f64,

    /// One of `real`, `fake`, `ambiguous`.
    pub category_guess: CategoryGuess,
}

/// One data row as raw text, sliced out of the table before validation.
///
/// This is also the error payload for row-level violations, so it
/// serializes with the same keys as [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub experiment_name: String,
    pub sample_id: String,
    pub fauxness: String,
    pub category_guess: String,
}
