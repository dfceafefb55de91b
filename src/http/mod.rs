//! HTTP client module
//!
//! Thin transport over reqwest for the Data API.
//!
//! # Features
//!
//! - **Fixed timeouts**: connect and total request timeouts, no retries
//! - **Relaxed TLS**: servers commonly run with self-signed certificates
//! - **Envelope decoding**: replies are read and parsed into an [`Envelope`]
//! - **Authentication**: per-request Basic or Bearer via [`AuthConfig`]
//!
//! [`Envelope`]: crate::decode::Envelope
//! [`AuthConfig`]: crate::auth::AuthConfig

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
