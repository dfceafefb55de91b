//! Applying authentication to outgoing requests

use super::types::{Credentials, Session};
use reqwest::RequestBuilder;

/// Authentication for a single request
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Basic auth from account credentials
    pub fn basic(credentials: &Credentials) -> Self {
        Self::Basic {
            username: credentials.username().to_string(),
            password: credentials.password().to_string(),
        }
    }

    /// Bearer auth from a database session
    pub fn bearer(session: &Session) -> Self {
        Self::Bearer {
            token: session.token().to_string(),
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            AuthConfig::None => req,
            AuthConfig::Basic { username, password } => req.basic_auth(username, Some(password)),
            AuthConfig::Bearer { token } => req.bearer_auth(token),
        }
    }
}
