//! Authentication module
//!
//! Two schemes are used against the Data API:
//!
//! - HTTP Basic with the account credentials, for listing databases and
//!   opening a database session
//! - Bearer with the token of a [`Session`], for everything scoped to a
//!   database
//!
//! A session is an immutable value tied to one database. Authenticating
//! again yields a new session rather than updating an existing one.

mod authenticator;
mod types;

pub use authenticator::AuthConfig;
pub use types::{Credentials, Session};
