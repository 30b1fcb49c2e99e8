use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Base URL used when none is given: a collection variable the user fills in Postman
pub const DEFAULT_BASE_URL: &str = "{{base_url}}";

/// Collection name used when none can be derived
pub const DEFAULT_COLLECTION_NAME: &str = "collection";

/// Collection document shapes that can be produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Flat Postman v1 collection with ids and ordering arrays
    #[default]
    V1,
    /// Nested Postman v2.1 collection
    V2,
}

/// Options controlling one export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Prefix of every request URL
    pub base_url: String,
    /// Also export OPTIONS and HEAD requests
    pub include_options_and_head: bool,
    /// Also export the framework's static files route
    pub include_static_route: bool,
    /// Put namespaced routes into one folder per namespace
    pub group_into_folders: bool,
    /// Output document shape
    pub schema_version: SchemaVersion,
    /// Name of the collection
    pub collection_name: String,
    /// Indent the output; does not change the content
    pub pretty_print: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            include_options_and_head: false,
            include_static_route: false,
            group_into_folders: false,
            schema_version: SchemaVersion::default(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            pretty_print: false,
        }
    }
}

impl ExportConfig {
    /// Create a config with defaults and the given collection name
    pub fn named(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            ..Self::default()
        }
    }

    /// Rejects configurations no collection can be built from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the collection name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.collection_name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "collection name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
