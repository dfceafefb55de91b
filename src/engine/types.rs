//! Engine types
//!
//! Configuration, page and statistics types for the dump engine.

use crate::pagination::{PaginationState, DEFAULT_PAGE_SIZE};
use crate::types::Record;

/// One page of normalized records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Records of the page, field values already normalized
    pub records: Vec<Record>,
    /// Total record count of the layout reported with this page
    pub total_count: u64,
}

/// Configuration for dump operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Records requested per page
    pub page_size: u64,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DumpConfig {
    /// Create a new dump config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size; zero is raised to one
    #[must_use]
    pub fn with_page_size(mut self, size: u64) -> Self {
        self.page_size = size.max(1);
        self
    }
}

/// Statistics from a layout dump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpStats {
    /// Records written to the sink
    pub records_written: u64,
    /// Pages fetched
    pub pages_fetched: u64,
    /// Total record count reported by the last page
    pub total_record_count: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl DumpStats {
    /// Build the stats of a finished dump from its pagination state
    pub fn from_state(state: &PaginationState, duration_ms: u64) -> Self {
        Self {
            records_written: state.total_fetched,
            pages_fetched: state.pages,
            total_record_count: state.last_total.unwrap_or(0),
            duration_ms,
        }
    }

    /// Check if the written count matches the last reported total
    pub fn is_complete(&self) -> bool {
        self.records_written == self.total_record_count
    }
}
