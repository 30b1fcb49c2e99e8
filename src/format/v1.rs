use super::CollectionFormat;
use crate::collection::{Collection, Folder, Request};
use serde::Serialize;

/// Body mode of every exported request
pub const DATA_MODE: &str = "params";

/// Flat Postman v1 format.
///
/// Every request appears once in `requests`. Folders and the collection only refer to
/// requests by id, through their `order` arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct V1Format;

/// Postman v1 collection document
#[derive(Debug, Clone, Serialize)]
pub struct CollectionV1 {
    pub id: String,
    pub name: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
    /// Every request, folder members included
    pub requests: Vec<RequestV1>,
    /// Ids of the requests outside any folder
    pub order: Vec<String>,
    pub folders: Vec<FolderV1>,
}

/// Postman v1 request
#[derive(Debug, Clone, Serialize)]
pub struct RequestV1 {
    pub id: String,
    #[serde(rename = "collectionId")]
    pub collection_id: String,
    pub data: Vec<serde_json::Value>,
    #[serde(rename = "dataMode")]
    pub data_mode: String,
    pub description: String,
    pub headers: String,
    pub method: String,
    pub name: String,
    pub time: i64,
    pub url: String,
}

/// Postman v1 folder
#[derive(Debug, Clone, Serialize)]
pub struct FolderV1 {
    pub id: String,
    pub name: String,
    #[serde(rename = "collectionId")]
    pub collection_id: String,
    /// Ids of the member requests
    pub order: Vec<String>,
}

impl CollectionFormat for V1Format {
    type Document = CollectionV1;
    type Folder = FolderV1;
    type Request = RequestV1;

    fn render_request(&self, collection: &Collection, request: &Request) -> RequestV1 {
        RequestV1 {
            id: request.id.to_string(),
            collection_id: collection.id.to_string(),
            data: Vec::new(),
            data_mode: DATA_MODE.to_string(),
            description: request.description.clone(),
            headers: String::new(),
            method: request.method.to_string(),
            name: request.name.clone(),
            time: request.time,
            url: request.url.clone(),
        }
    }

    fn render_folder(&self, collection: &Collection, folder: &Folder) -> FolderV1 {
        FolderV1 {
            id: folder.id.to_string(),
            name: folder.name.clone(),
            collection_id: collection.id.to_string(),
            order: collection
                .folder_requests(folder)
                .map(|request| request.id.to_string())
                .collect(),
        }
    }

    fn render_document(&self, collection: &Collection) -> CollectionV1 {
        CollectionV1 {
            id: collection.id.to_string(),
            name: collection.name.clone(),
            timestamp: collection.timestamp,
            requests: collection
                .requests()
                .map(|request| self.render_request(collection, request))
                .collect(),
            order: collection
                .top_level_requests()
                .map(|request| request.id.to_string())
                .collect(),
            folders: collection
                .folders()
                .map(|folder| self.render_folder(collection, folder))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::HttpMethod;
    use std::collections::HashSet;

    fn sample_collection() -> Collection {
        let mut collection = Collection::new("api");
        collection.add_request(Request::new("foo", "{{base_url}}/foo", HttpMethod::Get), None);
        collection.add_request(
            Request::new("qux", "{{base_url}}/baz/qux", HttpMethod::Post).with_description("Make qux."),
            Some("baz"),
        );
        collection.add_request(Request::new("qux", "{{base_url}}/baz/qux", HttpMethod::Get), Some("baz"));
        collection
    }

    #[test]
    fn test_empty_collection() {
        let doc = V1Format.render_document(&Collection::new("api"));

        assert_eq!(doc.name, "api");
        assert!(doc.requests.is_empty());
        assert!(doc.order.is_empty());
        assert!(doc.folders.is_empty());
    }

    #[test]
    fn test_request_fields() {
        let collection = sample_collection();
        let doc = V1Format.render_document(&collection);

        let post = doc.requests.iter().find(|r| r.method == "POST").unwrap();
        assert_eq!(post.collection_id, doc.id);
        assert_eq!(post.data_mode, "params");
        assert!(post.data.is_empty());
        assert_eq!(post.headers, "");
        assert_eq!(post.description, "Make qux.");
        assert_eq!(post.url, "{{base_url}}/baz/qux");
    }

    #[test]
    fn test_requests_include_folder_members_in_order() {
        let doc = V1Format.render_document(&sample_collection());

        let listed: Vec<_> = doc.requests.iter().map(|r| format!("{} {}", r.method, r.name)).collect();
        assert_eq!(listed, vec!["GET foo", "GET qux", "POST qux"]);
    }

    #[test]
    fn test_order_only_lists_top_level_requests() {
        let doc = V1Format.render_document(&sample_collection());

        assert_eq!(doc.order.len(), 1);
        let top = doc.requests.iter().find(|r| r.id == doc.order[0]).unwrap();
        assert_eq!(top.name, "foo");
    }

    #[test]
    fn test_every_reference_resolves() {
        let doc = V1Format.render_document(&sample_collection());
        let ids: HashSet<_> = doc.requests.iter().map(|r| r.id.as_str()).collect();

        for id in doc.order.iter().chain(doc.folders.iter().flat_map(|f| f.order.iter())) {
            assert!(ids.contains(id.as_str()), "dangling id {}", id);
        }
        for folder in &doc.folders {
            assert_eq!(folder.collection_id, doc.id);
        }
        assert_eq!(doc.folders[0].order.len(), 2);
    }

    #[test]
    fn test_serialized_field_names() {
        let doc = V1Format.render_document(&sample_collection());
        let value = serde_json::to_value(&doc).unwrap();

        let request = &value["requests"][0];
        assert!(request.get("collectionId").is_some());
        assert!(request.get("dataMode").is_some());
        assert!(value["folders"][0].get("collectionId").is_some());
        assert!(value["timestamp"].is_i64());
    }
}
