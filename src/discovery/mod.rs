//! Schema discovery
//!
//! Lists the databases visible to the account and the layouts of an
//! authenticated database. Both calls are single request/response exchanges
//! validated with the shared envelope rule.

use crate::auth::{AuthConfig, Session};
use crate::client::FmClient;
use crate::decode::{DatabasesResponse, LayoutsResponse};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::{Database, Layout};
use reqwest::Method;
use tracing::debug;

impl FmClient {
    /// List the databases hosted on the server, using Basic authentication
    pub async fn list_databases(&self) -> Result<Vec<Database>> {
        let config = RequestConfig::new().auth(AuthConfig::basic(self.credentials()));
        let reply: DatabasesResponse = self.call(Method::GET, &["databases"], config).await?;

        debug!("Found {} databases", reply.databases.len());
        Ok(reply.databases)
    }

    /// List the layouts of the session's database.
    ///
    /// Folders are returned as they come from the server, with their
    /// children nested; see [`dumpable_layouts`] to flatten them.
    pub async fn list_layouts(&self, session: &Session) -> Result<Vec<Layout>> {
        let config = RequestConfig::new().auth(AuthConfig::bearer(session));
        let reply: LayoutsResponse = self
            .call(
                Method::GET,
                &["databases", session.database(), "layouts"],
                config,
            )
            .await?;

        debug!(
            "Found {} layouts in database {}",
            reply.layouts.len(),
            session.database()
        );
        Ok(reply.layouts)
    }
}

/// Flatten a layout tree into the layouts that hold records.
///
/// Folders are replaced by their descendants, depth first, keeping server
/// order. Folders themselves are never returned.
pub fn dumpable_layouts(layouts: &[Layout]) -> Vec<Layout> {
    let mut out = Vec::new();
    collect_leaves(layouts, &mut out);
    out
}

fn collect_leaves(layouts: &[Layout], out: &mut Vec<Layout>) {
    for layout in layouts {
        if layout.is_folder {
            collect_leaves(&layout.folder_layout_names, out);
        } else {
            out.push(Layout::new(layout.name.clone()));
        }
    }
}

#[cfg(test)]
mod tests;
