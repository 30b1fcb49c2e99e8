//! Folder grouping and route filtering policy.
//!
//! Decides which routes and methods are exported at all, and which folder (if any) a
//! route's requests go into. Folder creation itself happens in the collection's own
//! registry; this module only names the folder.

use crate::config::ExportConfig;
use crate::source::{HttpMethod, RouteDescriptor};

/// Endpoint name of the framework-provided static files route
pub const STATIC_ENDPOINT: &str = "static";

/// Separator between a namespace and the rest of an endpoint name
pub const NAMESPACE_SEPARATOR: char = '.';

/// Returns the namespace of a qualified endpoint name: the text before the first separator.
///
/// Endpoints without a separator, or with nothing before it, have no namespace.
pub fn namespace(endpoint: &str) -> Option<&str> {
    match endpoint.split_once(NAMESPACE_SEPARATOR) {
        Some((namespace, _)) if !namespace.is_empty() => Some(namespace),
        _ => None,
    }
}

/// Route filtering and folder assignment, derived from an [`ExportConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingPolicy {
    group_into_folders: bool,
    include_static_route: bool,
    include_options_and_head: bool,
}

impl GroupingPolicy {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            group_into_folders: config.group_into_folders,
            include_static_route: config.include_static_route,
            include_options_and_head: config.include_options_and_head,
        }
    }

    /// Folder for the requests of `route`, when grouping is enabled and it has a namespace
    pub fn folder_for<'r>(&self, route: &'r RouteDescriptor) -> Option<&'r str> {
        if !self.group_into_folders {
            return None;
        }
        namespace(&route.endpoint)
    }

    /// Whether `route` is left out of the export entirely
    pub fn skips_route(&self, route: &RouteDescriptor) -> bool {
        route.endpoint == STATIC_ENDPOINT && !self.include_static_route
    }

    /// Whether requests for `method` are left out
    pub fn skips_method(&self, method: &HttpMethod) -> bool {
        matches!(method, HttpMethod::Options | HttpMethod::Head) && !self.include_options_and_head
    }
}
