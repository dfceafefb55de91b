//! Pagination types

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch another page starting at this offset
    Continue {
        /// 1-based offset of the next page
        offset: u64,
    },
    /// No more pages
    Done,
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based offset of the page to fetch
    pub offset: u64,
    /// Pages fetched so far
    pub pages: u64,
    /// Records received so far
    pub total_fetched: u64,
    /// Total record count reported by the last page
    pub last_total: Option<u64>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            offset: 1,
            pages: 0,
            total_fetched: 0,
            last_total: None,
        }
    }
}

impl PaginationState {
    /// Create a state positioned on the first record
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the offset, saturating at `u64::MAX`
    pub fn add_offset(&mut self, amount: u64) {
        self.offset = self.offset.saturating_add(amount);
    }

    /// Record a received page
    pub fn add_page(&mut self, records: u64, total: u64) {
        self.pages += 1;
        self.total_fetched = self.total_fetched.saturating_add(records);
        self.last_total = Some(total);
    }
}
