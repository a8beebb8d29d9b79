//! Per-row field validation.
//!
//! Checks run in a fixed order and stop at the first failure, so the
//! reported error for a row with several problems is deterministic:
//! experiment_name, then sample_id, then fauxness, then category_guess.

use crate::error::ExtractionError;
use crate::record::{CategoryGuess, RawRow, Record};

/// Validates one raw row against the fixed schema.
pub struct RecordValidator;

impl RecordValidator {
    /// Validate `raw` as the data row at zero-based index `row`.
    ///
    /// Pure: no side effects beyond constructing the [`Record`] or the
    /// error detail.
    pub fn validate(raw: &RawRow, row: usize) -> Result<Record, ExtractionError> {
        if raw.experiment_name.is_empty() {
            return Err(ExtractionError::EmptyExperimentName {
                row,
                raw: raw.clone(),
            });
        }

        let sample_id = Self::validate_sample_id(raw, row)?;
        let fauxness = Self::validate_fauxness(raw, row)?;

        let category_guess = CategoryGuess::parse_exact(&raw.category_guess).ok_or_else(|| {
            ExtractionError::InvalidCategoryGuess {
                row,
                value: raw.category_guess.clone(),
                raw: raw.clone(),
            }
        })?;

        Ok(Record {
            experiment_name: raw.experiment_name.clone(),
            sample_id,
            fauxness,
            category_guess,
        })
    }

    fn validate_sample_id(raw: &RawRow, row: usize) -> Result<i64, ExtractionError> {
        let value = raw.sample_id.as_str();

        // Digits only: a leading minus sign is lexically rejected here,
        // as is anything too large for i64.
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ExtractionError::SampleIdNotInt {
                row,
                value: value.to_string(),
            });
        }
        let sample_id: i64 =
            value
                .parse()
                .map_err(|_| ExtractionError::SampleIdNotInt {
                    row,
                    value: value.to_string(),
                })?;

        // Unreachable after the digit check; kept so the non-negative
        // invariant survives any future change to the lexical rule.
        if sample_id < 0 {
            return Err(ExtractionError::SampleIdNegative {
                row,
                value: sample_id,
                raw: raw.clone(),
            });
        }

        Ok(sample_id)
    }

    fn validate_fauxness(raw: &RawRow, row: usize) -> Result<f64, ExtractionError> {
        let fauxness: f64 =
            raw.fauxness
                .parse()
                .map_err(|_| ExtractionError::FauxnessNotFloat {
                    row,
                    value: raw.fauxness.clone(),
                    raw: raw.clone(),
                })?;

        if fauxness < 0.0 || fauxness > 1.0 {
            return Err(ExtractionError::FauxnessOutOfRange {
                row,
                value: fauxness,
                raw: raw.clone(),
            });
        }

        Ok(fauxness)
    }
}
