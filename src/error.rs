//! Error types produced by the converter.
//!
//! Every failure mode is a typed variant rather than a stringly error, so the
//! binary can map each kind to a distinct exit code and callers embedding the
//! library can match on the cause. No variant is recoverable: a conversion
//! run either completes or fails as a whole.

use std::path::PathBuf;

use arrow::datatypes::DataType;
use thiserror::Error;

/// Errors that can occur while converting a Parquet vector column to JSONL.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The configured input file does not exist. Checked before anything is
    /// read or written, so this variant guarantees no output side effects.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Reading the input or writing the output failed mid-run. Partial
    /// output may exist and is not guaranteed consistent.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The input file is corrupt or not a Parquet file.
    #[error("failed to read parquet file: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Decoding a record batch from the file failed.
    #[error("failed to decode record batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// The configured vector column is absent from the file schema.
    #[error("column {column:?} not found in input schema")]
    ColumnNotFound {
        /// Name of the column that was requested.
        column: String,
    },

    /// The vector column (or its element type) is not one of the accepted
    /// numeric vector encodings.
    #[error("column {column:?} has unsupported type {data_type}, expected a list of numbers")]
    UnsupportedColumnType {
        /// Name of the offending column.
        column: String,
        /// Arrow type actually found in the file.
        data_type: DataType,
    },

    /// A row's vector value is null.
    #[error("row {row} has a null vector value")]
    NullVector {
        /// Zero-based row index in input order.
        row: usize,
    },

    /// A vector contains a null element.
    #[error("row {row} has a null element at position {index}")]
    NullElement {
        /// Zero-based row index in input order.
        row: usize,
        /// Zero-based position of the null element within the vector.
        index: usize,
    },

    /// Serializing a vector to JSON failed.
    #[error("failed to serialize vector: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    /// Process exit code the binary should terminate with for this error.
    ///
    /// A missing input file exits with 1, matching the precondition check
    /// that runs before any output is touched. Every other failure is a
    /// mid-run fatal error and exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::MissingInput(_) => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_maps_to_exit_1() {
        let err = ConvertError::MissingInput(PathBuf::from("/nope.parquet"));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/nope.parquet"));
    }

    #[test]
    fn other_errors_map_to_exit_2() {
        let err = ConvertError::ColumnNotFound {
            column: "emb".into(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = ConvertError::NullElement { row: 7, index: 2 };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("row 7"));
    }

    #[test]
    fn unsupported_type_names_column_and_type() {
        let err = ConvertError::UnsupportedColumnType {
            column: "emb".into(),
            data_type: DataType::Utf8,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"emb\""));
        assert!(msg.contains("Utf8"));
    }
}
