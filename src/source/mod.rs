//! Route input module: the records handed to the collection builder and the sources that
//! produce them.
//!
//! Route discovery itself happens outside this crate. Whatever performed it hands over an
//! ordered list of [`RouteDescriptor`] values through a [`RouteSource`]; the shipped
//! implementation is [`manifest::ManifestSource`], which reads a JSON or YAML manifest.
//!
//! # Example
//!
//! ```no_run
//! use postman_from_routes::source::{RouteSource, manifest::ManifestSource};
//! use std::path::PathBuf;
//!
//! let source = ManifestSource::new(PathBuf::from("routes.json"));
//! let routes = source.routes().unwrap();
//! println!("Found {} routes", routes.len());
//! ```

pub mod manifest;

use crate::error::Result;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for anything able to supply the routes of an application.
///
/// Implementations must distinguish an application that has no routes (`Ok` with an empty
/// vector) from a source that cannot be reached at all
/// ([`Error::RouteSourceUnavailable`](crate::error::Error::RouteSourceUnavailable)).
pub trait RouteSource {
    /// Returns every route of the application, in discovery order.
    fn routes(&self) -> Result<Vec<RouteDescriptor>>;
}

/// One registered URL pattern of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Qualified endpoint name, `namespace.leaf` or just `leaf` (e.g. "users.get_user")
    pub endpoint: String,
    /// The URL path pattern with `<name>` or `<converter:name>` placeholders
    pub rule: String,
    /// Methods the route answers to; duplicates collapse, first-seen order is kept
    pub methods: IndexSet<HttpMethod>,
    /// Raw documentation text of the view, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl RouteDescriptor {
    /// Create a new RouteDescriptor without documentation
    pub fn new<I>(endpoint: impl Into<String>, rule: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = HttpMethod>,
    {
        Self {
            endpoint: endpoint.into(),
            rule: rule.into(),
            methods: methods.into_iter().collect(),
            doc: None,
        }
    }

    /// Attach documentation text
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// HTTP methods a route may answer to.
///
/// The named variants are the methods a collection knows how to order; anything else is
/// kept verbatim in [`HttpMethod::Other`] and sorts after all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Copy,
    Head,
    Options,
    Link,
    Unlink,
    Purge,
    /// A method outside the known set, stored upper-cased
    Other(String),
}

impl HttpMethod {
    /// Get the HTTP method as an upper-case string
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Copy => "COPY",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Link => "LINK",
            HttpMethod::Unlink => "UNLINK",
            HttpMethod::Purge => "PURGE",
            HttpMethod::Other(name) => name,
        }
    }

    /// Parse a method name, case-insensitively. Never fails.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "COPY" => HttpMethod::Copy,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            "LINK" => HttpMethod::Link,
            "UNLINK" => HttpMethod::Unlink,
            "PURGE" => HttpMethod::Purge,
            other => HttpMethod::Other(other.to_string()),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for HttpMethod {
    fn from(value: String) -> Self {
        HttpMethod::parse(&value)
    }
}

impl From<&str> for HttpMethod {
    fn from(value: &str) -> Self {
        HttpMethod::parse(value)
    }
}

impl From<HttpMethod> for String {
    fn from(value: HttpMethod) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("get"), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("Unlink"), HttpMethod::Unlink);
        assert_eq!(HttpMethod::parse(" purge "), HttpMethod::Purge);
    }

    #[test]
    fn test_unknown_method_is_kept_upper_cased() {
        let method = HttpMethod::parse("propfind");
        assert_eq!(method, HttpMethod::Other("PROPFIND".to_string()));
        assert_eq!(method.to_string(), "PROPFIND");
    }

    #[test]
    fn test_route_methods_collapse_duplicates() {
        let route = RouteDescriptor::new(
            "bar",
            "/bar",
            vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Get],
        );
        let methods: Vec<_> = route.methods.iter().map(HttpMethod::as_str).collect();
        assert_eq!(methods, vec!["GET", "POST"]);
    }

    #[test]
    fn test_route_deserializes_methods_from_strings() {
        let json = r#"{"endpoint": "get_foo", "rule": "/foo", "methods": ["get", "HEAD"]}"#;
        let route: RouteDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(route.endpoint, "get_foo");
        assert!(route.methods.contains(&HttpMethod::Get));
        assert!(route.methods.contains(&HttpMethod::Head));
        assert!(route.doc.is_none());
    }
}
