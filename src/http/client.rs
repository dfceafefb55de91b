//! HTTP client with fixed timeouts
//!
//! Provides the transport used by every Data API call:
//! - One reqwest client with connect and total timeouts
//! - Certificate validation that can be switched off
//! - URL building from percent-encoded path segments
//! - Reading reply bodies into envelopes

use crate::auth::AuthConfig;
use crate::decode::{decode_envelope, Envelope};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests (scheme, host and port)
    pub base_url: Option<String>,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// Skip server certificate validation
    pub accept_invalid_certs: bool,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert(
            CONTENT_TYPE.as_str().to_string(),
            "application/json".to_string(),
        );

        Self {
            base_url: None,
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(20),
            accept_invalid_certs: true,
            default_headers,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the total request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Enable or disable certificate validation
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, sent in insertion order
    pub query: Vec<(String, String)>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Authentication for this request
    pub auth: AuthConfig,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set authentication
    #[must_use]
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }
}

/// HTTP client for the Data API
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    base_url: Option<Url>,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let base_url = config.base_url.as_deref().map(Url::parse).transpose()?;

        let mut headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::config(format!("Invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("Invalid value for header '{key}': {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Build a URL from path segments appended to the base URL.
    ///
    /// Each segment is percent-encoded, so names containing `/`, `?` or
    /// spaces stay within their segment.
    pub fn endpoint<I, S>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self
            .base_url
            .clone()
            .ok_or_else(|| Error::config("HTTP client has no base URL"))?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!("Base URL cannot have a path: {url}")));
        }
        url.path_segments_mut()
            .map_err(|()| Error::config("Base URL cannot have a path"))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return the raw response, whatever its status
    pub async fn request(&self, method: Method, url: Url, config: RequestConfig) -> Result<Response> {
        debug!("Request: {} {}", method, url.path());

        let mut req = self.client.request(method.clone(), url);

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        req = config.auth.apply(req);

        let response = req.send().await?;
        debug!("Response: {} {}", method, response.status());
        Ok(response)
    }

    /// Send a request and decode the reply envelope
    pub async fn request_envelope(
        &self,
        method: Method,
        url: Url,
        config: RequestConfig,
    ) -> Result<Envelope> {
        let response = self.request(method, url, config).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
