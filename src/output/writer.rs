//! JSON lines writer
//!
//! Writes each value as one complete JSON document followed by a newline,
//! so every line parses on its own and nothing wraps the whole stream.

use crate::error::{Error, Result};
use serde::Serialize;
use std::io::Write;

/// Streaming JSON lines writer over any [`Write`] sink
pub struct JsonLinesWriter<W: Write> {
    /// Underlying sink
    inner: W,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Create a new writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one value as a line
    pub fn write<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.inner, value).map_err(|e| Error::Output {
            message: format!("Failed to write record: {e}"),
        })?;
        self.inner.write_all(b"\n").map_err(|e| Error::Output {
            message: format!("Failed to write record: {e}"),
        })?;
        Ok(())
    }

    /// Write every value of a slice
    pub fn write_all<T: Serialize>(&mut self, values: &[T]) -> Result<()> {
        for value in values {
            self.write(value)?;
        }
        Ok(())
    }

    /// Flush buffered lines to the sink
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(|e| Error::Output {
            message: format!("Failed to flush output: {e}"),
        })
    }
}
