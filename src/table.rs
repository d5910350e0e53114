//! Parquet input loading.
//!
//! The whole file is materialized into memory before any output is written;
//! there is no streaming overlap between read and write. Record batches are
//! kept in file order rather than concatenated, which preserves row order
//! without an extra copy.

use std::fs::File;
use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::{RecordBatch, RecordBatchReader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::ConvertError;

/// A fully materialized Parquet table.
#[derive(Debug)]
pub struct Table {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    rows: usize,
}

impl Table {
    /// Reads the entire Parquet file at `path` into memory.
    ///
    /// The existence check runs before the file is opened so that a missing
    /// input surfaces as [`ConvertError::MissingInput`] with no side
    /// effects; corrupt or non-Parquet files fail while building the reader
    /// or while decoding batches.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        if !path.exists() {
            return Err(ConvertError::MissingInput(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
        let schema = reader.schema().clone();
        let batches = reader.collect::<Result<Vec<_>, _>>()?;
        let rows = batches.iter().map(RecordBatch::num_rows).sum();
        Ok(Self {
            schema,
            batches,
            rows,
        })
    }

    /// Total number of rows across all batches.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Record batches in file order.
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Resolves a column name to its index in the schema.
    pub fn column_index(&self, column: &str) -> Result<usize, ConvertError> {
        self.schema
            .index_of(column)
            .map_err(|_| ConvertError::ColumnNotFound {
                column: column.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_is_a_precondition_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.parquet");
        match Table::load(&path) {
            Err(ConvertError::MissingInput(p)) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn garbage_file_fails_as_parquet_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.parquet");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"this is not a parquet file").unwrap();
        drop(f);

        assert!(matches!(
            Table::load(&path),
            Err(ConvertError::Parquet(_))
        ));
    }
}
