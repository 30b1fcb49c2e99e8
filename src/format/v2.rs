use super::CollectionFormat;
use crate::collection::{Collection, Folder, Request};
use serde::Serialize;

/// Schema marker identifying a Postman v2.1 collection
pub const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Nested Postman v2.1 format.
///
/// Top-level requests come first, followed by one folder item per folder. Nothing in the
/// output depends on ids or clocks, so rendering is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct V2Format;

/// Postman v2.1 collection document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionV2 {
    pub info: Info,
    pub item: Vec<Item>,
}

/// Collection metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub name: String,
    pub schema: String,
}

/// An entry of an `item` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Endpoint(EndpointItem),
    Folder(FolderItem),
}

/// A single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointItem {
    pub name: String,
    pub request: RequestV2,
}

/// Request details of an [`EndpointItem`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestV2 {
    pub url: String,
    pub method: String,
    pub description: String,
}

/// A folder and the requests it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderItem {
    pub name: String,
    pub item: Vec<EndpointItem>,
}

impl CollectionFormat for V2Format {
    type Document = CollectionV2;
    type Folder = FolderItem;
    type Request = EndpointItem;

    fn render_request(&self, _collection: &Collection, request: &Request) -> EndpointItem {
        EndpointItem {
            name: request.name.clone(),
            request: RequestV2 {
                url: request.url.clone(),
                method: request.method.to_string(),
                description: request.description.clone(),
            },
        }
    }

    fn render_folder(&self, collection: &Collection, folder: &Folder) -> FolderItem {
        FolderItem {
            name: folder.name.clone(),
            item: collection
                .folder_requests(folder)
                .map(|request| self.render_request(collection, request))
                .collect(),
        }
    }

    fn render_document(&self, collection: &Collection) -> CollectionV2 {
        let endpoints = collection
            .top_level_requests()
            .map(|request| Item::Endpoint(self.render_request(collection, request)));
        let folders = collection
            .folders()
            .map(|folder| Item::Folder(self.render_folder(collection, folder)));

        CollectionV2 {
            info: Info {
                name: collection.name.clone(),
                schema: SCHEMA_URL.to_string(),
            },
            item: endpoints.chain(folders).collect(),
        }
    }
}
