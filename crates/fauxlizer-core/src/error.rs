//! Validation error taxonomy.
//!
//! Every failure is a value with a stable status code and a payload
//! pointing at the offending raw row or field. Nothing here is a process
//! fault; callers branch on [`ExtractionError::code`] before touching the
//! payload.

use serde_json::{json, Value};
use thiserror::Error;

use crate::record::RawRow;

/// A validation failure. The first one encountered invalidates the whole
/// extraction; there is no partial-success mode.
///
/// Row indices are zero-based data-row positions. They enrich the Display
/// message but are not part of the payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("header line is missing a required column: {line:?}")]
    InvalidHeaders { line: String },

    #[error("row {row}: experiment_name is empty")]
    EmptyExperimentName { row: usize, raw: RawRow },

    #[error("row {row}: sample_id {value:?} is not an unsigned integer")]
    SampleIdNotInt { row: usize, value: String },

    #[error("row {row}: sample_id {value} is negative")]
    SampleIdNegative { row: usize, value: i64, raw: RawRow },

    #[error("row {row}: fauxness {value:?} is not a number")]
    FauxnessNotFloat { row: usize, value: String, raw: RawRow },

    #[error("row {row}: fauxness {value} is outside [0.0, 1.0]")]
    FauxnessOutOfRange { row: usize, value: f64, raw: RawRow },

    #[error("row {row}: category_guess {value:?} is not one of real/fake/ambiguous")]
    InvalidCategoryGuess { row: usize, value: String, raw: RawRow },

    #[error("table has a valid header but no data rows")]
    NoData,
}

impl ExtractionError {
    /// Stable status tag, used verbatim as the summary status.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidHeaders { .. } => "INVALID_HEADERS",
            Self::EmptyExperimentName { .. } => "EMPTY_EXPERIMENT_NAME",
            Self::SampleIdNotInt { .. } => "SAMPLE_ID_NOT_INT",
            Self::SampleIdNegative { .. } => "SAMPLE_ID_NEGATIVE",
            Self::FauxnessNotFloat { .. } => "FAUXNESS_NOT_FLOAT",
            Self::FauxnessOutOfRange { .. } => "FAUXNESS_OUT_OF_RANGE",
            Self::InvalidCategoryGuess { .. } => "INVALID_CATEGORY_GUESS",
            Self::NoData => "NO_DATA",
        }
    }

    /// The offending detail, ready to pass through as a summary payload.
    ///
    /// Header and sample_id lexical failures carry the single offending
    /// field; row-level failures carry the whole raw row. `NO_DATA` has
    /// nothing to point at and yields an empty list.
    pub fn payload(&self) -> Value {
        match self {
            Self::InvalidHeaders { line } => Value::String(line.clone()),
            Self::EmptyExperimentName { raw, .. } => json!(raw),
            Self::SampleIdNotInt { value, .. } => Value::String(value.clone()),
            Self::SampleIdNegative { raw, .. } => json!(raw),
            Self::FauxnessNotFloat { raw, .. } => json!(raw),
            Self::FauxnessOutOfRange { raw, .. } => json!(raw),
            Self::InvalidCategoryGuess { raw, .. } => json!(raw),
            Self::NoData => json!([]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawRow {
        RawRow {
            experiment_name: "exp1".to_string(),
            sample_id: "3".to_string(),
            fauxness: "2.5".to_string(),
            category_guess: "real".to_string(),
        }
    }

    #[test]
    fn test_codes_are_stable() {
        let cases = [
            (
                ExtractionError::InvalidHeaders {
                    line: "a,b".to_string(),
                },
                "INVALID_HEADERS",
            ),
            (
                ExtractionError::EmptyExperimentName { row: 0, raw: raw() },
                "EMPTY_EXPERIMENT_NAME",
            ),
            (
                ExtractionError::SampleIdNotInt {
                    row: 0,
                    value: "abc".to_string(),
                },
                "SAMPLE_ID_NOT_INT",
            ),
            (
                ExtractionError::SampleIdNegative {
                    row: 0,
                    value: -1,
                    raw: raw(),
                },
                "SAMPLE_ID_NEGATIVE",
            ),
            (
                ExtractionError::FauxnessNotFloat {
                    row: 0,
                    value: "x".to_string(),
                    raw: raw(),
                },
                "FAUXNESS_NOT_FLOAT",
            ),
            (
                ExtractionError::FauxnessOutOfRange {
                    row: 0,
                    value: 2.5,
                    raw: raw(),
                },
                "FAUXNESS_OUT_OF_RANGE",
            ),
            (
                ExtractionError::InvalidCategoryGuess {
                    row: 0,
                    value: "Real".to_string(),
                    raw: raw(),
                },
                "INVALID_CATEGORY_GUESS",
            ),
            (ExtractionError::NoData, "NO_DATA"),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_field_level_payload_is_the_field() {
        let err = ExtractionError::SampleIdNotInt {
            row: 2,
            value: "-5".to_string(),
        };
        assert_eq!(err.payload(), Value::String("-5".to_string()));

        let err = ExtractionError::InvalidHeaders {
            line: "experiment_name,sample_id".to_string(),
        };
        assert_eq!(
            err.payload(),
            Value::String("experiment_name,sample_id".to_string())
        );
    }

    #[test]
    fn test_row_level_payload_is_the_raw_row() {
        let err = ExtractionError::FauxnessOutOfRange {
            row: 0,
            value: 2.5,
            raw: raw(),
        };
        let payload = err.payload();
        assert_eq!(payload["experiment_name"], "exp1");
        assert_eq!(payload["fauxness"], "2.5");
    }
}
