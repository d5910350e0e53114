//! vec2jsonl: Parquet vector column → JSONL fixture converter.
//!
//! Reads a single Parquet file, extracts one column of numeric vectors
//! (default `emb`), and writes each vector as one line of compact JSON to a
//! text file — the input fixture format expected by the downstream
//! benchmark runner (one embedding vector per line).
//!
//! ## What we do here
//!
//! - **Materialize** the whole input into memory, then make a single
//!   ordered pass — no streaming overlap, no reordering, no filtering.
//! - **Normalize** every accepted column encoding (fixed-size list,
//!   variable-length list) into one ordered sequence of numbers before
//!   serialization.
//! - **Fail whole**: any error aborts the run; there is no per-row
//!   isolation or retry. Errors are typed so the binary can map a missing
//!   input to exit 1 and everything else to exit 2.
//!
//! ## Example
//!
//! ```no_run
//! use vec2jsonl::{convert, ConvertConfig};
//!
//! let config = ConvertConfig {
//!     input: "/dataset/test_large.parquet".into(),
//!     output: "vectors_large.jsonl".into(),
//!     column: "emb".into(),
//! };
//! let report = convert(&config)?;
//! println!("wrote {} vectors", report.rows);
//! # Ok::<(), vec2jsonl::ConvertError>(())
//! ```

use std::time::Instant;

use tracing::{Level, info, warn};

mod config;
mod error;
mod table;
mod vector;
mod writer;

pub use crate::config::{ConfigError, ConvertConfig, DEFAULT_COLUMN, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use crate::error::ConvertError;
pub use crate::table::Table;
pub use crate::vector::{Scalar, VectorColumn};
pub use crate::writer::JsonlWriter;

/// Summary of a completed conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    /// Number of vectors written; equals the input row count.
    pub rows: usize,
}

/// Converts the configured Parquet vector column to a JSONL file.
///
/// Single straight-line pass: check the input exists, materialize the whole
/// file, resolve the column, then write one compact JSON array line per row
/// in input order. The output file is created (or truncated) only after the
/// input has loaded and the column has resolved, so schema failures leave
/// an existing output untouched.
pub fn convert(config: &ConvertConfig) -> Result<ConvertReport, ConvertError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "convert",
        input = %config.input.display(),
        column = %config.column,
    );
    let _guard = span.enter();

    match convert_inner(config) {
        Ok(report) => {
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                rows = report.rows,
                elapsed_ms,
                output = %config.output.display(),
                "conversion complete"
            );
            Ok(report)
        }
        Err(err) => {
            let elapsed_ms = start.elapsed().as_millis();
            warn!(error = %err, elapsed_ms, "conversion failed");
            Err(err)
        }
    }
}

fn convert_inner(config: &ConvertConfig) -> Result<ConvertReport, ConvertError> {
    info!(input = %config.input.display(), "reading parquet file");
    let table = Table::load(&config.input)?;
    let column_index = table.column_index(&config.column)?;

    // Validate the column encoding across all batches before the output is
    // created, so schema-level failures leave an existing output untouched.
    let columns = table
        .batches()
        .iter()
        .map(|batch| VectorColumn::try_new(&config.column, batch.column(column_index).as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    info!(rows = table.num_rows(), "converting vectors to jsonl");
    let mut writer = JsonlWriter::create(&config.output)?;
    let mut row = 0usize;
    for (batch, column) in table.batches().iter().zip(&columns) {
        for idx in 0..batch.num_rows() {
            let vector = column.vector(idx, row)?;
            writer.write_vector(&vector)?;
            row += 1;
        }
    }
    let rows = writer.finish()?;

    Ok(ConvertReport { rows })
}
