//! Envelope decoding and field normalization

use super::types::Envelope;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Record};

/// Longest body excerpt kept in an error message
const MAX_ERROR_BODY: usize = 512;

/// Parse a raw reply body into an envelope.
///
/// The server answers with an envelope on most error statuses too (a 401
/// for bad credentials still carries `{"messages":[...]}`), so the HTTP
/// status only matters when the body is not an envelope.
pub fn decode_envelope(status: u16, body: &str) -> Result<Envelope> {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => {
            Err(Error::http_status(status, truncate(body, MAX_ERROR_BODY)))
        }
        Err(e) => Err(Error::decode(format!("Failed to parse JSON envelope: {e}"))),
    }
}

/// Replace every string field that holds a JSON document with the parsed value.
///
/// Only the field's own string is parsed; strings inside the parsed value are
/// left as they are. Strings that are not valid JSON are kept.
pub fn normalize_fields(fields: &mut JsonObject) {
    for value in fields.values_mut() {
        let parsed = match value {
            JsonValue::String(s) => serde_json::from_str::<JsonValue>(s).ok(),
            _ => None,
        };
        if let Some(parsed) = parsed {
            *value = parsed;
        }
    }
}

/// Normalize the field data of a record in place
pub fn normalize_record(record: &mut Record) {
    normalize_fields(&mut record.field_data);
}

fn truncate(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
