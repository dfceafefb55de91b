//! Response decoder module
//!
//! Every Data API reply is wrapped in the same envelope: a `messages` array
//! carrying the call status and a `response` object carrying the payload.
//!
//! # Overview
//!
//! - [`Envelope`] and the payload types for each endpoint
//! - [`decode_envelope`] parses a raw reply body
//! - [`Envelope::into_response`] applies the status rule shared by all calls
//! - [`normalize_record`] unwraps field values that hold JSON documents

mod decoders;
mod types;

pub use decoders::{decode_envelope, normalize_fields, normalize_record};
pub use types::{
    DataInfo, DatabasesResponse, Envelope, LayoutsResponse, RecordsResponse, StatusMessage,
    TokenResponse, OK_MESSAGE,
};
