//! Offset pagination

use super::types::{NextPage, PaginationState};

/// Query parameter carrying the 1-based offset
pub const OFFSET_PARAM: &str = "_offset";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "_limit";

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// 1-based offset pagination bounded by the server-reported total
///
/// Offsets form the sequence 1, 1 + limit, 1 + 2 * limit, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPaginator {
    /// Number of records per page
    pub limit: u64,
}

impl Default for OffsetPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl OffsetPaginator {
    /// Create a paginator; a zero limit is raised to one
    pub fn new(limit: u64) -> Self {
        Self {
            limit: limit.max(1),
        }
    }

    /// Query parameters for the page starting at `offset`
    pub fn params(&self, offset: u64) -> Vec<(String, String)> {
        vec![
            (OFFSET_PARAM.to_string(), offset.to_string()),
            (LIMIT_PARAM.to_string(), self.limit.to_string()),
        ]
    }

    /// Record a received page and decide whether to fetch another.
    ///
    /// The offset always advances by the page size; paging stops when the
    /// new offset is greater than or equal to `total_count`. An offset that
    /// would overflow saturates, which always ends paging.
    pub fn process_page(
        &self,
        records_count: usize,
        total_count: u64,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_page(records_count as u64, total_count);
        state.add_offset(self.limit);

        if state.offset >= total_count {
            return NextPage::Done;
        }

        NextPage::Continue {
            offset: state.offset,
        }
    }
}
