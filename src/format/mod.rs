//! Output formats for a finished [`Collection`].
//!
//! Both Postman schema versions render the same model. Each one is a [`CollectionFormat`]
//! strategy that knows how to render a request, a folder, and the whole document; the
//! shared work (URL rewriting, descriptions, ordering, grouping) is done before they run.
//!
//! - [`v1::V1Format`]: flat document, requests cross-referenced by id
//! - [`v2::V2Format`]: nested document, folders contain their items

pub mod v1;
pub mod v2;

use crate::collection::{Collection, Folder, Request};
use crate::config::SchemaVersion;
use serde::Serialize;

/// A strategy rendering a [`Collection`] into one document shape.
pub trait CollectionFormat {
    /// The whole document
    type Document: Serialize;
    /// A rendered folder
    type Folder: Serialize;
    /// A rendered request
    type Request: Serialize;

    /// Renders a single request of `collection`.
    fn render_request(&self, collection: &Collection, request: &Request) -> Self::Request;

    /// Renders a folder of `collection`.
    fn render_folder(&self, collection: &Collection, folder: &Folder) -> Self::Folder;

    /// Renders the complete document.
    fn render_document(&self, collection: &Collection) -> Self::Document;
}

/// A rendered collection in either schema version
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ExportDocument {
    V1(v1::CollectionV1),
    V2(v2::CollectionV2),
}

impl ExportDocument {
    pub fn schema_version(&self) -> SchemaVersion {
        match self {
            ExportDocument::V1(_) => SchemaVersion::V1,
            ExportDocument::V2(_) => SchemaVersion::V2,
        }
    }

    /// Number of requests in the document, folder members included
    pub fn request_count(&self) -> usize {
        match self {
            ExportDocument::V1(doc) => doc.requests.len(),
            ExportDocument::V2(doc) => doc
                .item
                .iter()
                .map(|item| match item {
                    v2::Item::Endpoint(_) => 1,
                    v2::Item::Folder(folder) => folder.item.len(),
                })
                .sum(),
        }
    }

    pub fn folder_count(&self) -> usize {
        match self {
            ExportDocument::V1(doc) => doc.folders.len(),
            ExportDocument::V2(doc) => doc
                .item
                .iter()
                .filter(|item| matches!(item, v2::Item::Folder(_)))
                .count(),
        }
    }
}

/// Renders `collection` with the format matching `version`.
pub fn render(collection: &Collection, version: SchemaVersion) -> ExportDocument {
    match version {
        SchemaVersion::V1 => ExportDocument::V1(v1::V1Format.render_document(collection)),
        SchemaVersion::V2 => ExportDocument::V2(v2::V2Format.render_document(collection)),
    }
}
