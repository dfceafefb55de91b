//! CLI runner - executes a dump

use crate::auth::Session;
use crate::cli::commands::Cli;
use crate::client::FmClient;
use crate::discovery::dumpable_layouts;
use crate::engine::{DumpConfig, DumpEngine, DumpStats};
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::output::{create_output_dir, layout_file_path};
use crate::types::{Database, Layout};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Summary of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Databases processed
    pub databases: usize,
    /// Databases skipped after a failed authentication or layout listing
    pub databases_failed: usize,
    /// Layouts dumped completely
    pub layouts_dumped: usize,
    /// Layouts whose dump failed
    pub layouts_failed: usize,
    /// Records written across all layouts
    pub records: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl RunStats {
    /// Check if every database and layout was dumped
    pub fn is_success(&self) -> bool {
        self.databases_failed == 0 && self.layouts_failed == 0
    }
}

/// Errors that will recur on every following call stop the whole run
fn is_fatal(err: &Error) -> bool {
    err.is_infrastructure() || matches!(err, Error::Output { .. })
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the dump.
    ///
    /// Returns `Err` only for failures that end the run: an existing or
    /// uncreatable output directory, an unreachable server, a failed
    /// database listing or a filesystem error. Failures scoped to one
    /// database or layout are logged and counted in the returned stats.
    pub async fn run(&self) -> Result<RunStats> {
        let start = Instant::now();
        let mut stats = RunStats::default();

        let client = FmClient::from_url_with_config(&self.cli.url, self.http_config())?;
        let output_dir = create_output_dir(&self.cli.output_dir)?;
        let engine = DumpEngine::new(&client).with_config(self.dump_config());

        if let Some(base) = client.base_url() {
            info!("Dumping server {} into {}", base, output_dir.display());
        }

        let databases = self.select_databases(client.list_databases().await?);

        for database in &databases {
            stats.databases += 1;
            info!("Found database {}", database.name);

            let session = match client.authenticate(&database.name).await {
                Ok(session) => session,
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => {
                    error!("Failed to authenticate to database {}: {}", database.name, e);
                    stats.databases_failed += 1;
                    continue;
                }
            };

            let layouts = match client.list_layouts(&session).await {
                Ok(layouts) => self.select_layouts(&dumpable_layouts(&layouts)),
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => {
                    error!("Failed to list layouts of database {}: {}", database.name, e);
                    stats.databases_failed += 1;
                    continue;
                }
            };

            for layout in &layouts {
                let path = layout_file_path(&output_dir, &database.name, &layout.name);
                match self.dump_layout(&engine, &session, layout, &path).await {
                    Ok(dump) => {
                        info!(
                            "Wrote {} records of {}/{} to {}",
                            dump.records_written,
                            database.name,
                            layout.name,
                            path.display()
                        );
                        stats.layouts_dumped += 1;
                        stats.records += dump.records_written;
                    }
                    Err(e) if is_fatal(&e) => return Err(e),
                    Err(e) => {
                        error!("Failed to dump {}/{}: {}", database.name, layout.name, e);
                        stats.layouts_failed += 1;
                    }
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Dumped {} layouts ({} records) from {} databases in {} ms; {} layouts failed, {} databases skipped",
            stats.layouts_dumped,
            stats.records,
            stats.databases,
            stats.duration_ms,
            stats.layouts_failed,
            stats.databases_failed
        );

        Ok(stats)
    }

    /// Dump one layout into a new file at `path`
    async fn dump_layout(
        &self,
        engine: &DumpEngine<'_>,
        session: &Session,
        layout: &Layout,
        path: &Path,
    ) -> Result<DumpStats> {
        let file = File::create(path).map_err(|e| Error::Output {
            message: format!("Failed to create {}: {e}", path.display()),
        })?;
        let mut writer = BufWriter::new(file);

        let dump = engine.dump(session, &layout.name, &mut writer).await?;

        writer.flush().map_err(|e| Error::Output {
            message: format!("Failed to flush {}: {e}", path.display()),
        })?;
        Ok(dump)
    }

    fn http_config(&self) -> HttpClientConfig {
        let timeout = Duration::from_secs(self.cli.timeout);
        HttpClientConfig::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
    }

    fn dump_config(&self) -> DumpConfig {
        DumpConfig::new().with_page_size(self.cli.page_size)
    }

    fn select_databases(&self, databases: Vec<Database>) -> Vec<Database> {
        if self.cli.databases.is_empty() {
            return databases;
        }
        for wanted in &self.cli.databases {
            if !databases.iter().any(|db| &db.name == wanted) {
                warn!("Database {} not found on server", wanted);
            }
        }
        databases
            .into_iter()
            .filter(|db| self.cli.databases.contains(&db.name))
            .collect()
    }

    fn select_layouts(&self, layouts: &[Layout]) -> Vec<Layout> {
        if self.cli.layouts.is_empty() {
            return layouts.to_vec();
        }
        layouts
            .iter()
            .filter(|layout| self.cli.layouts.contains(&layout.name))
            .cloned()
            .collect()
    }
}
