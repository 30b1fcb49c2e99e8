//! Postman From Routes - Postman collections from the routes of a web application.
//!
//! This library turns a flat list of route descriptors (URL pattern, methods, qualified
//! endpoint name, documentation) into an importable Postman collection, either in the flat
//! v1 schema or in the nested v2.1 schema.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`source`] - Route descriptors and the sources supplying them
//! 2. [`url_template`] - Rewrites `<converter:name>` placeholders into `{{name}}` variables
//! 3. [`docstring`] - Normalizes documentation into request descriptions
//! 4. [`ordering`] - Orders requests by method priority, then name
//! 5. [`grouping`] - Chooses exported routes/methods and their folders
//! 6. [`collection`] - The collection model shared by every output format
//! 7. [`collection_builder`] - Fills a collection from route descriptors
//! 8. [`format`] - Renders a collection as a v1 or v2.1 document
//! 9. [`serializer`] - Serializes documents to JSON
//!
//! # Example Usage
//!
//! ```
//! use postman_from_routes::{
//!     collection_builder::export_collection,
//!     config::{ExportConfig, SchemaVersion},
//!     serializer::serialize_document,
//!     source::{HttpMethod, RouteDescriptor},
//! };
//!
//! let routes = vec![
//!     RouteDescriptor::new("get_foo", "/foo", vec![HttpMethod::Get]).with_doc("Get some foo."),
//!     RouteDescriptor::new("patch_foo", "/foo/<int:id>", vec![HttpMethod::Patch]),
//! ];
//!
//! let config = ExportConfig {
//!     schema_version: SchemaVersion::V2,
//!     ..ExportConfig::named("My API")
//! };
//! let document = export_collection(&routes, &config).unwrap();
//!
//! let json = serialize_document(&document, true).unwrap();
//! assert!(json.contains("{{base_url}}/foo/{{id}}"));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod collection;
pub mod collection_builder;
pub mod config;
pub mod docstring;
pub mod error;
pub mod format;
pub mod grouping;
pub mod ordering;
pub mod serializer;
pub mod source;
pub mod url_template;
