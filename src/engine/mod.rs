//! Execution engine module
//!
//! Record pagination and dump loop.
//!
//! # Overview
//!
//! The engine module provides:
//! - `DumpEngine` - Drains every record of one layout into a sink
//! - `DumpConfig` - Configuration for dump operations
//! - `Page` and `DumpStats` - Fetch results and dump statistics
//!
//! Pages are fetched one at a time and written out before the next request,
//! so memory use is bounded by the page size rather than the layout size.

mod types;

pub use types::{DumpConfig, DumpStats, Page};

use crate::auth::{AuthConfig, Session};
use crate::client::FmClient;
use crate::decode::{normalize_record, RecordsResponse};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::output::JsonLinesWriter;
use crate::pagination::{NextPage, OffsetPaginator, PaginationState};
use reqwest::Method;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Dump engine for one server
pub struct DumpEngine<'a> {
    /// Data API client
    client: &'a FmClient,
    /// Dump configuration
    config: DumpConfig,
}

impl<'a> DumpEngine<'a> {
    /// Create a new dump engine
    pub fn new(client: &'a FmClient) -> Self {
        Self {
            client,
            config: DumpConfig::default(),
        }
    }

    /// Set dump configuration
    #[must_use]
    pub fn with_config(mut self, config: DumpConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch one page of records of `layout` in the session's database.
    ///
    /// `offset` is 1-based. Every returned record has its field data
    /// normalized. The total count is the server's figure for the whole
    /// layout at the time of the call.
    pub async fn fetch_page(
        &self,
        session: &Session,
        layout: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Page> {
        let mut config = RequestConfig::new().auth(AuthConfig::bearer(session));
        for (key, value) in OffsetPaginator::new(limit).params(offset) {
            config = config.query(key, value);
        }

        let reply: RecordsResponse = self
            .client
            .call(
                Method::GET,
                &["databases", session.database(), "layouts", layout, "records"],
                config,
            )
            .await?;

        let mut records = reply.data;
        records.iter_mut().for_each(normalize_record);

        Ok(Page {
            records,
            total_count: reply.data_info.total_record_count,
        })
    }

    /// Write every record of `layout` to `sink`, one JSON document per line.
    ///
    /// Paging starts at offset 1 and stops once the next offset reaches the
    /// total reported by the most recent page. Any error ends the dump; lines
    /// already written stay in the sink.
    pub async fn dump<W: Write>(
        &self,
        session: &Session,
        layout: &str,
        sink: W,
    ) -> Result<DumpStats> {
        let start = Instant::now();
        let paginator = OffsetPaginator::new(self.config.page_size);
        let mut state = PaginationState::new();
        let mut writer = JsonLinesWriter::new(sink);

        info!("Dumping layout {} of database {}", layout, session.database());

        loop {
            let page = self
                .fetch_page(session, layout, state.offset, paginator.limit)
                .await?;

            writer.write_all(&page.records)?;
            writer.flush()?;

            debug!(
                "Page {} at offset {}: {} records of {}",
                state.pages + 1,
                state.offset,
                page.records.len(),
                page.total_count
            );

            match paginator.process_page(page.records.len(), page.total_count, &mut state) {
                NextPage::Continue { offset } => {
                    debug!("Next page of {} starts at offset {}", layout, offset);
                }
                NextPage::Done => break,
            }
        }

        let stats = DumpStats::from_state(&state, start.elapsed().as_millis() as u64);

        if !stats.is_complete() {
            warn!(
                "Layout {} of database {}: wrote {} records, server reported {}",
                layout,
                session.database(),
                stats.records_written,
                stats.total_record_count
            );
        }
        info!(
            "Completed layout {}: {} records in {} pages",
            layout, stats.records_written, stats.pages_fetched
        );

        Ok(stats)
    }
}
