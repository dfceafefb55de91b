//! CLI module
//!
//! Command-line interface for dumping a server.
//!
//! `fmdump <URL> <OUTPUT_DIR>` creates the output directory, then dumps every
//! layout of every database the account can open into
//! `{database}-{layout}.json` files.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{RunStats, Runner};
