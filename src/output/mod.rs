//! Output module
//!
//! Handles the dump files: one JSON document per line, one file per
//! (database, layout) pair inside a freshly created output directory.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Streaming serializable values as JSON lines
//! - Creating the private output directory
//! - Deriving safe file names from database and layout names

mod dir;
mod writer;

pub use dir::{create_output_dir, layout_file_name, layout_file_path, FILE_EXTENSION};
pub use writer::JsonLinesWriter;
