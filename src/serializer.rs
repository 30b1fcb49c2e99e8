//! Serialization module for turning rendered collections into JSON text.
//!
//! This module provides functions to serialize collection documents, compactly or indented,
//! and write them to files.

use crate::error::{Error, Result};
use crate::format::ExportDocument;
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Indentation of pretty-printed documents
const INDENT: &[u8] = b"    ";

/// Serializes a collection document to JSON.
///
/// Compact output keeps the field order of the document. Pretty output is indented by four
/// spaces with object keys sorted, which keeps diffs between exports small.
///
/// # Errors
///
/// Returns [`Error::SerializationError`] if serialization fails.
///
/// # Example
///
/// ```
/// use postman_from_routes::collection_builder::export_collection;
/// use postman_from_routes::config::{ExportConfig, SchemaVersion};
/// use postman_from_routes::serializer::serialize_document;
///
/// let config = ExportConfig { schema_version: SchemaVersion::V2, ..ExportConfig::named("api") };
/// let doc = export_collection(&[], &config).unwrap();
/// let json = serialize_document(&doc, false).unwrap();
/// assert!(json.ends_with(r#""item":[]}"#));
/// ```
pub fn serialize_document(doc: &ExportDocument, pretty: bool) -> Result<String> {
    if !pretty {
        debug!("Serializing collection to compact JSON");
        return Ok(serde_json::to_string(doc)?);
    }

    debug!("Serializing collection to indented JSON");
    // serde_json::Value keeps object keys sorted
    let value = serde_json::to_value(doc)?;
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| Error::SerializationError(e.to_string()))
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`Error::IoError`] if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
