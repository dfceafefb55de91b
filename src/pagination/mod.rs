//! Pagination module
//!
//! Records are read with 1-based offset/limit paging (`_offset`, `_limit`).
//!
//! # Overview
//!
//! [`OffsetPaginator`] produces the query parameters of each page and decides
//! when to stop. The stopping signal is the total record count reported by
//! the server on the most recent page, not the number of records received:
//! after each page the offset advances by the page size and paging ends once
//! the offset reaches or passes that total.
//!
//! The total is re-read on every page. If records are added during a dump
//! paging simply continues; if records are removed the dump may end before
//! every remaining record was read.

mod strategies;
mod types;

pub use strategies::{OffsetPaginator, DEFAULT_PAGE_SIZE, LIMIT_PARAM, OFFSET_PARAM};
pub use types::{NextPage, PaginationState};
