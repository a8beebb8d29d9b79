//! Single-row rendering in JSON, CSV, or native form.

use std::fmt;

use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::Record;

/// Errors from row rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("row index {index} out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to encode record: {0}")]
    Encode(String),
}

/// Requested encoding for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowFormat {
    Json,
    Csv,
    /// The in-memory record, unconverted, for same-process consumption.
    #[default]
    Native,
}

impl RowFormat {
    /// Permissive parse: an unrecognized name falls back to the native
    /// form rather than erroring.
    pub fn from_name(name: &str) -> Self {
        match name {
            "JSON" | "json" => Self::Json,
            "CSV" | "csv" => Self::Csv,
            _ => Self::Native,
        }
    }
}

/// One rendered row, in the encoding that was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedRow {
    Json(String),
    Csv(String),
    Native(Record),
}

impl fmt::Display for RenderedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(text) | Self::Csv(text) => f.write_str(text),
            Self::Native(record) => write!(f, "{record:?}"),
        }
    }
}

/// Renders one validated record from an extraction payload.
pub struct RowFormatter;

impl RowFormatter {
    /// Render the row at zero-based `index` in the requested encoding.
    pub fn fetch_row(
        rows: &[Record],
        index: usize,
        format: RowFormat,
    ) -> Result<RenderedRow, FormatError> {
        let record = rows.get(index).ok_or(FormatError::IndexOutOfRange {
            index,
            len: rows.len(),
        })?;

        match format {
            RowFormat::Json => {
                let text = serde_json::to_string(record)
                    .map_err(|e| FormatError::Encode(e.to_string()))?;
                Ok(RenderedRow::Json(text))
            }
            RowFormat::Csv => Ok(RenderedRow::Csv(Self::to_csv(record)?)),
            RowFormat::Native => Ok(RenderedRow::Native(record.clone())),
        }
    }

    /// Header line of the four field names, then one data line. String
    /// fields are quoted, numeric fields are not.
    fn to_csv(record: &Record) -> Result<String, FormatError> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::NonNumeric)
            .from_writer(Vec::new());

        writer
            .serialize(record)
            .map_err(|e| FormatError::Encode(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| FormatError::Encode(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| FormatError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CategoryGuess;

    fn rows() -> Vec<Record> {
        vec![
            Record {
                experiment_name: "exp1".to_string(),
                sample_id: 3,
                fauxness: 0.75,
                category_guess: CategoryGuess::Real,
            },
            Record {
                experiment_name: "exp2".to_string(),
                sample_id: 4,
                fauxness: 0.25,
                category_guess: CategoryGuess::Fake,
            },
        ]
    }

    #[test]
    fn test_json_rendering() {
        let rendered = RowFormatter::fetch_row(&rows(), 0, RowFormat::Json).unwrap();
        let RenderedRow::Json(text) = rendered else {
            panic!("expected JSON");
        };

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["experiment_name"], "exp1");
        assert_eq!(value["sample_id"], 3);
        assert_eq!(value["fauxness"], 0.75);
        assert_eq!(value["category_guess"], "real");
    }

    #[test]
    fn test_json_round_trip() {
        let rendered = RowFormatter::fetch_row(&rows(), 1, RowFormat::Json).unwrap();
        let RenderedRow::Json(text) = rendered else {
            panic!("expected JSON");
        };

        let decoded: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, rows()[1]);
    }

    #[test]
    fn test_csv_rendering_quotes_only_strings() {
        let rendered = RowFormatter::fetch_row(&rows(), 0, RowFormat::Csv).unwrap();
        let RenderedRow::Csv(text) = rendered else {
            panic!("expected CSV");
        };

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("\"experiment_name\",\"sample_id\",\"fauxness\",\"category_guess\"")
        );
        assert_eq!(lines.next(), Some("\"exp1\",3,0.75,\"real\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_native_rendering_is_the_record() {
        let rendered = RowFormatter::fetch_row(&rows(), 1, RowFormat::Native).unwrap();
        assert_eq!(rendered, RenderedRow::Native(rows()[1].clone()));
    }

    #[test]
    fn test_index_out_of_range() {
        let err = RowFormatter::fetch_row(&rows(), 5, RowFormat::Json).unwrap_err();
        assert_eq!(err, FormatError::IndexOutOfRange { index: 5, len: 2 });
    }

    #[test]
    fn test_unknown_format_name_falls_back_to_native() {
        assert_eq!(RowFormat::from_name("JSON"), RowFormat::Json);
        assert_eq!(RowFormat::from_name("csv"), RowFormat::Csv);
        assert_eq!(RowFormat::from_name("PYTHON"), RowFormat::Native);
        assert_eq!(RowFormat::from_name(""), RowFormat::Native);
    }
}
