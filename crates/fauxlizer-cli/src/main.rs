//! Batch driver for fauxlizer table validation.
//!
//! Validates each named input independently and prints one summary per
//! file. Validation failures are ordinary summaries; only unreadable
//! inputs make the process exit non-zero.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fauxlizer_core::{RowFormat, RowFormatter, SummaryBuilder, TableExtractor};

#[derive(Parser)]
#[command(
    name = "fauxlizer",
    about = "Validate fauxlizer result tables and report summaries",
    version
)]
struct Cli {
    /// Input tables, one summary per file
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Also render this zero-based row from each valid table
    #[arg(long)]
    row: Option<usize>,

    /// Encoding for --row output; unrecognized names fall back to native
    #[arg(long, default_value = "json")]
    format: String,

    /// Pretty-print summary JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let builder = SummaryBuilder::new();
    let format = RowFormat::from_name(&cli.format);
    let mut unreadable = 0usize;

    for path in &cli.files {
        let result = match TableExtractor::extract_file(path) {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "cannot read input");
                eprintln!("{}: {err}", path.display());
                unreadable += 1;
                continue;
            }
        };

        let summary = builder.build(&result);
        let json = if cli.pretty {
            serde_json::to_string_pretty(&summary)?
        } else {
            serde_json::to_string(&summary)?
        };
        println!("{} {json}", path.display());

        if let (Some(index), Ok(rows)) = (cli.row, &result) {
            match RowFormatter::fetch_row(rows, index, format) {
                Ok(rendered) => println!("{rendered}"),
                Err(err) => eprintln!("{}: {err}", path.display()),
            }
        }
    }

    if unreadable > 0 {
        bail!("{unreadable} input(s) could not be read");
    }
    Ok(())
}
