//! Summary derivation from an extraction outcome.
//!
//! A [`Summary`] is a pure function of the [`ExtractionResult`]: it holds
//! no identity of its own and is recomputed per call, never cached.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extractor::ExtractionResult;
use crate::record::Record;

/// Status tag of a successful extraction.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Aggregate report over one extraction outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// `"SUCCESS"`, or the code of the first validation failure.
    pub status: String,

    /// Empty on success; the offending raw row or field on failure,
    /// passed through unchanged.
    pub payload: Value,

    /// Row statistics on success; empty on failure.
    pub extras: SummaryExtras,
}

/// Success statistics. Serializes to `{}` when absent so a failure
/// summary still carries an `extras` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryExtras {
    /// Number of validated rows. At least 1 whenever status is SUCCESS;
    /// a zero-row table is `NO_DATA`, never a zero-row success.
    #[serde(rename = "rowCount", default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,

    /// Minimum and maximum fauxness across the rows. A single-row table
    /// has min == max.
    #[serde(
        rename = "fauxnessRange",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fauxness_range: Option<(f64, f64)>,
}

/// Derives a [`Summary`] from an [`ExtractionResult`].
pub struct SummaryBuilder;

impl SummaryBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the report. Failure details pass through uninterpreted.
    pub fn build(&self, result: &ExtractionResult) -> Summary {
        match result {
            Ok(rows) => self.success(rows),
            Err(err) => Summary {
                status: err.code().to_string(),
                payload: err.payload(),
                extras: SummaryExtras::default(),
            },
        }
    }

    fn success(&self, rows: &[Record]) -> Summary {
        let mut fauxnesses: Vec<f64> = rows.iter().map(|r| r.fauxness).collect();
        fauxnesses.sort_by(f64::total_cmp);

        // The extractor never returns a zero-row success, so first/last
        // are always present.
        let min = fauxnesses.first().copied().unwrap_or_default();
        let max = fauxnesses.last().copied().unwrap_or_default();

        Summary {
            status: STATUS_SUCCESS.to_string(),
            payload: Value::String(String::new()),
            extras: SummaryExtras {
                row_count: Some(rows.len()),
                fauxness_range: Some((min, max)),
            },
        }
    }
}

impl Default for SummaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
