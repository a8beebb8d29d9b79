//! # fauxlizer-core
//!
//! Strict validation and reporting engine for fauxlizer result tables:
//! comma-delimited text with a header line and rows of classification
//! results (`experiment_name`, `sample_id`, `fauxness`, `category_guess`).
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same input always produces the same outcome, and
//!    per-row checks run in a fixed order so the reported error is stable
//! 2. **All-or-nothing**: one malformed row invalidates the whole table;
//!    there is no partial-success mode
//! 3. **Errors as values**: every failure is an [`ExtractionError`] with a
//!    stable code and the offending raw row or field as payload, never a
//!    panic
//! 4. **Stateless**: no component holds state across calls
//!
//! ## Example
//!
//! ```rust
//! use fauxlizer_core::{extract_str, RowFormat, RowFormatter, SummaryBuilder};
//!
//! let input = "experiment_name,sample_id,fauxness,category_guess\nexp1,3,0.75,real\n";
//! let result = extract_str(input);
//!
//! let summary = SummaryBuilder::new().build(&result);
//! assert_eq!(summary.status, "SUCCESS");
//!
//! let rows = result.unwrap();
//! let rendered = RowFormatter::fetch_row(&rows, 0, RowFormat::Json).unwrap();
//! ```

pub mod error;
pub mod extractor;
pub mod format;
pub mod record;
pub mod summary;
pub mod validator;

// Re-export main types at crate root
pub use error::ExtractionError;
pub use extractor::{ExtractionResult, TableExtractor};
pub use format::{FormatError, RenderedRow, RowFormat, RowFormatter};
pub use record::{CategoryGuess, RawRow, Record, REQUIRED_HEADERS};
pub use summary::{Summary, SummaryBuilder, SummaryExtras, STATUS_SUCCESS};
pub use validator::RecordValidator;

use std::io;
use std::path::Path;

/// Validate a table held in memory.
///
/// This is the main entry point; see [`TableExtractor`] for the header and
/// row contracts.
pub fn extract_str(input: &str) -> ExtractionResult {
    TableExtractor::extract_str(input)
}

/// Read a file to completion and validate it as a table.
pub fn extract_file(path: impl AsRef<Path>) -> io::Result<ExtractionResult> {
    TableExtractor::extract_file(path)
}

/// Derive the aggregate report for an extraction outcome.
pub fn summarize(result: &ExtractionResult) -> Summary {
    SummaryBuilder::new().build(result)
}
