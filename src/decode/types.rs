//! Envelope and payload types
//!
//! The payload is kept as raw JSON until the status messages have been
//! checked, because failure replies carry an empty `response` object.

use crate::error::{Error, Result};
use crate::types::{Database, JsonValue, Layout, Record};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Status text the server uses for a successful call
pub const OK_MESSAGE: &str = "OK";

/// One status message from the `messages` array
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Numeric status code, sent as a string ("0", "212", ...)
    #[serde(default, deserialize_with = "string_or_number")]
    pub code: String,
    /// Human-readable status text
    #[serde(default)]
    pub message: String,
}

impl StatusMessage {
    /// Create a status message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The reply wrapper shared by every endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    /// Status messages; exactly one is expected
    #[serde(default)]
    pub messages: Vec<StatusMessage>,
    /// Endpoint-specific payload
    #[serde(default)]
    pub response: JsonValue,
}

impl Envelope {
    /// Check the status messages.
    ///
    /// No message is reported as "unknown errors" and several messages as
    /// "multiple errors", both protocol errors. A single message is a
    /// success only when its text is exactly "OK"; any other text becomes an
    /// application error carrying that text.
    pub fn validate(&self) -> Result<()> {
        match self.messages.as_slice() {
            [] => Err(Error::protocol("unknown errors")),
            [status] if status.message == OK_MESSAGE => Ok(()),
            [status] => Err(Error::application(status.message.clone())),
            _ => Err(Error::protocol("multiple errors")),
        }
    }

    /// Validate the envelope and decode its payload
    pub fn into_response<T: DeserializeOwned>(self) -> Result<T> {
        self.validate()?;
        serde_json::from_value(self.response)
            .map_err(|e| Error::decode(format!("Failed to decode response payload: {e}")))
    }
}

/// Payload of `POST /databases/{db}/sessions`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for the database
    pub token: String,
}

/// Payload of `GET /databases`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabasesResponse {
    #[serde(default)]
    pub databases: Vec<Database>,
}

/// Payload of `GET /databases/{db}/layouts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutsResponse {
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

/// Payload of `GET /databases/{db}/layouts/{layout}/records`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsResponse {
    /// Records of this page
    #[serde(default)]
    pub data: Vec<Record>,
    /// Paging metadata
    #[serde(default)]
    pub data_info: DataInfo,
}

/// Paging metadata of a records reply
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataInfo {
    /// Number of records in the layout at the time of the call
    #[serde(default)]
    pub total_record_count: u64,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
