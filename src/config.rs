//! Configuration for a conversion run.
//!
//! The original deployment hard-codes its paths, so [`ConvertConfig`] carries
//! those values as overridable defaults rather than module constants: a
//! default-constructed config reproduces the fixed deployment exactly, and
//! the CLI (or an embedding caller) can override any field.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default input path: the benchmark dataset location.
pub const DEFAULT_INPUT: &str = "/dataset/test_large.parquet";

/// Default output file name, written to the working directory.
pub const DEFAULT_OUTPUT: &str = "vectors_large.jsonl";

/// Default name of the column holding one embedding vector per row.
pub const DEFAULT_COLUMN: &str = "emb";

/// Runtime configuration for the converter.
///
/// Cheap to clone and serializable, so it can be loaded from external
/// configuration as well as built from CLI arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Path to the Parquet file to read.
    pub input: PathBuf,

    /// Path of the JSONL file to write. Created or truncated at run start.
    pub output: PathBuf,

    /// Name of the column holding the per-row numeric vector.
    pub column: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            column: DEFAULT_COLUMN.to_string(),
        }
    }
}

/// Errors detected when validating a [`ConvertConfig`].
///
/// These are configuration-time issues, surfaced at process start-up rather
/// than mid-conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The vector column name is empty.
    #[error("column name must not be empty")]
    EmptyColumn,

    /// The output path is empty.
    #[error("output path must not be empty")]
    EmptyOutput,
}

impl ConvertConfig {
    /// Validates internal consistency of this configuration.
    ///
    /// In-memory checks only; existence of the input file is checked at
    /// conversion time so that the missing-input diagnostic carries the
    /// resolved path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column.is_empty() {
            return Err(ConfigError::EmptyColumn);
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutput);
        }
        Ok(())
    }
}
