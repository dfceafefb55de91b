//! Common types used throughout fmdump
//!
//! This module contains the records, databases and layouts exchanged
//! with the Data API, plus a few type aliases.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Schema
// ============================================================================

/// A hosted database, identified by its server-assigned name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Database name
    pub name: String,
}

/// A layout (view over the records of a database)
///
/// Folder layouts only group other layouts; their children are listed in
/// `folder_layout_names`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Layout name
    pub name: String,
    /// Whether this entry is a folder rather than a dumpable layout
    #[serde(default)]
    pub is_folder: bool,
    /// Layouts contained in this folder
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folder_layout_names: Vec<Layout>,
}

impl Layout {
    /// Create a plain layout
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_folder: false,
            folder_layout_names: Vec::new(),
        }
    }

    /// Create a folder containing the given layouts
    #[cfg(test)]
    pub fn folder(name: impl Into<String>, children: Vec<Layout>) -> Self {
        Self {
            name: name.into(),
            is_folder: true,
            folder_layout_names: children,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// One record of a layout, as written to the dump file
///
/// Field values are arbitrary JSON: strings, numbers, booleans, null, or
/// nested objects and arrays once JSON-in-string fields are unwrapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Server-assigned record id
    pub record_id: String,
    /// Field name to value
    #[serde(default)]
    pub field_data: JsonObject,
}
