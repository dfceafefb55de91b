//! Data API client
//!
//! [`FmClient`] owns the transport and the account credentials. Calls that
//! are scoped to a database take a [`Session`] obtained from
//! [`FmClient::authenticate`].

use crate::auth::{AuthConfig, Credentials, Session};
use crate::decode::{Envelope, TokenResponse};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

/// Path prefix of every Data API endpoint
pub const API_PATH: [&str; 3] = ["fmi", "data", "v2"];

/// Client for one Data API server
pub struct FmClient {
    http: HttpClient,
    credentials: Credentials,
}

impl FmClient {
    /// Create a client from a root URL with default transport settings.
    ///
    /// The URL has the form `scheme://[user:password@]host[:port]`; see
    /// [`FmClient::from_url_with_config`].
    pub fn from_url(root_url: &str) -> Result<Self> {
        Self::from_url_with_config(root_url, HttpClientConfig::default())
    }

    /// Create a client from a root URL.
    ///
    /// Credentials embedded in the URL are removed from it and kept for
    /// Basic authentication. Any path, query or fragment is dropped: the
    /// bare origin becomes the API root.
    pub fn from_url_with_config(root_url: &str, config: HttpClientConfig) -> Result<Self> {
        let mut url = Url::parse(root_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Unsupported URL scheme '{}', expected http or https",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(Error::config("URL has no host"));
        }

        let credentials = Credentials::take_from_url(&mut url);
        url.set_path("");
        url.set_query(None);
        url.set_fragment(None);

        let http = HttpClient::with_config(HttpClientConfig {
            base_url: Some(url.to_string()),
            ..config
        })?;

        Ok(Self { http, credentials })
    }

    /// The API root (origin without credentials)
    pub fn base_url(&self) -> Option<&Url> {
        self.http.base_url()
    }

    /// Account credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Open a session on `database`.
    ///
    /// Sends the account credentials to the database's session endpoint and
    /// returns a new [`Session`] holding the issued token. The token is only
    /// valid for this database.
    pub async fn authenticate(&self, database: &str) -> Result<Session> {
        info!("Authenticating to database {}", database);

        let config = RequestConfig::new()
            .json(json!({}))
            .auth(AuthConfig::basic(&self.credentials));
        let reply: TokenResponse = self
            .call(Method::POST, &["databases", database, "sessions"], config)
            .await?;

        debug!("Session opened on database {}", database);
        Ok(Session::new(database, reply.token))
    }

    /// Send a request to an API endpoint and return the validated payload.
    ///
    /// `path` is relative to [`API_PATH`]; each element is one path segment.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        config: RequestConfig,
    ) -> Result<T> {
        self.call_envelope(method, path, config)
            .await?
            .into_response()
    }

    /// Send a request to an API endpoint and return the unvalidated envelope
    pub async fn call_envelope(
        &self,
        method: Method,
        path: &[&str],
        config: RequestConfig,
    ) -> Result<Envelope> {
        let url = self.http.endpoint(API_PATH.iter().chain(path.iter()))?;
        self.http.request_envelope(method, url, config).await
    }
}

impl std::fmt::Debug for FmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmClient")
            .field("base_url", &self.base_url().map(Url::as_str))
            .field("credentials", &self.credentials)
            .finish()
    }
}
