//! Credential and session types

use percent_encoding::percent_decode_str;
use url::Url;

/// Account credentials taken from the `user:password@` part of the root URL
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Remove the userinfo from a URL and return it as credentials.
    ///
    /// Username and password are percent-decoded. A URL without userinfo
    /// yields empty credentials.
    pub fn take_from_url(url: &mut Url) -> Self {
        let username = percent_decode(url.username());
        let password = url.password().map(percent_decode).unwrap_or_default();

        // Only fails for URLs that cannot carry credentials (e.g. "data:")
        let _ = url.set_username("");
        let _ = url.set_password(None);

        Self::new(username, password)
    }

    /// Username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check if no username was supplied
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated session on one database
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    database: String,
    token: String,
}

impl Session {
    /// Create a session from a token issued for `database`
    pub fn new(database: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            token: token.into(),
        }
    }

    /// Database this session was opened on
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Bearer token
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("database", &self.database)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Decode `%XX` escapes; invalid UTF-8 is replaced
fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
