//! Compact JSONL output.
//!
//! One JSON array literal per line, no inserted whitespace, `\n` terminated.
//! The underlying file is created (or truncated) when the writer is built
//! and explicitly flushed by [`JsonlWriter::finish`] so that late write
//! errors surface as [`ConvertError::Io`] instead of vanishing in `Drop`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ConvertError;
use crate::vector::Scalar;

/// Buffered line writer for vector JSON.
pub struct JsonlWriter {
    inner: BufWriter<File>,
    lines: usize,
}

impl JsonlWriter {
    /// Creates (or truncates) the output file at `path`.
    pub fn create(path: &Path) -> Result<Self, ConvertError> {
        let file = File::create(path)?;
        Ok(Self {
            inner: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Writes one vector as a compact JSON array line.
    pub fn write_vector(&mut self, vector: &[Scalar]) -> Result<(), ConvertError> {
        let json = serde_json::to_string(vector)?;
        self.inner.write_all(json.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Flushes and closes the writer, returning the number of lines written.
    pub fn finish(mut self) -> Result<usize, ConvertError> {
        self.inner.flush()?;
        Ok(self.lines)
    }
}
