//! Table extraction: header contract plus row-by-row validation.
//!
//! Extraction is all-or-nothing. The first violation aborts the whole
//! table and is returned verbatim; there are no partial results and no
//! row skipping.

use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::ExtractionError;
use crate::record::{RawRow, Record, REQUIRED_HEADERS};
use crate::validator::RecordValidator;

/// Outcome of one extraction: every row validated, or the first failure.
pub type ExtractionResult = Result<Vec<Record>, ExtractionError>;

/// Reads a header and data rows from a text source and validates each row.
pub struct TableExtractor;

impl TableExtractor {
    /// Validate a whole table held in memory.
    pub fn extract_str(input: &str) -> ExtractionResult {
        Self::check_headers(input)?;
        Self::extract_rows(input)
    }

    /// Read `path` to completion, then validate it as a table.
    ///
    /// The handle is opened, fully consumed, and released before this
    /// returns, on every exit path. Io problems are infrastructure, not
    /// validation outcomes, so they stay in the outer `Result`.
    pub fn extract_file(path: impl AsRef<Path>) -> io::Result<ExtractionResult> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::extract_str(&contents))
    }

    /// Header contract: substring containment on the physical first line,
    /// order-independent, not exact column-set equality. Extra columns
    /// are ignored.
    fn check_headers(input: &str) -> Result<(), ExtractionError> {
        let line = input.lines().next().unwrap_or_default();
        for header in REQUIRED_HEADERS {
            if !line.contains(header) {
                tracing::warn!(missing = header, "header line rejected");
                return Err(ExtractionError::InvalidHeaders {
                    line: line.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Re-parse the source from the top as a headered CSV table. The
    /// header row is consumed here and never emitted as a record.
    fn extract_rows(input: &str) -> ExtractionResult {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(input.as_bytes());

        // A flexible reader over in-memory UTF-8 cannot fail; an empty
        // header set just means no fields resolve, which the validator
        // rejects row by row.
        let headers = reader
            .headers()
            .map(StringRecord::clone)
            .unwrap_or_default();
        let columns = ColumnIndex::resolve(&headers);

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.unwrap_or_default();
            let raw = columns.slice(&record);

            match RecordValidator::validate(&raw, index) {
                Ok(record) => rows.push(record),
                Err(err) => {
                    tracing::warn!(row = index, code = err.code(), "row rejected");
                    return Err(err);
                }
            }
        }

        if rows.is_empty() {
            return Err(ExtractionError::NoData);
        }

        tracing::debug!(rows = rows.len(), "table validated");
        Ok(rows)
    }
}

/// Positions of the required columns within the header row.
///
/// Lookup is by exact header name. A column that passed the substring
/// precheck but has no exact-name match resolves to `None` and yields
/// empty fields, which then fail validation normally.
struct ColumnIndex {
    experiment_name: Option<usize>,
    sample_id: Option<usize>,
    fauxness: Option<usize>,
    category_guess: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            experiment_name: find("experiment_name"),
            sample_id: find("sample_id"),
            fauxness: find("fauxness"),
            category_guess: find("category_guess"),
        }
    }

    fn slice(&self, record: &StringRecord) -> RawRow {
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        RawRow {
            experiment_name: field(self.experiment_name),
            sample_id: field(self.sample_id),
            fauxness: field(self.fauxness),
            category_guess: field(self.category_guess),
        }
    }
}
