use crate::collection::{Collection, Request};
use crate::config::ExportConfig;
use crate::docstring::describe;
use crate::error::Result;
use crate::format::{render, ExportDocument};
use crate::grouping::GroupingPolicy;
use crate::source::RouteDescriptor;
use crate::url_template::{request_name, rewrite_url};
use log::debug;

/// Collection builder: turns route descriptors into a [`Collection`].
///
/// Each builder owns the collection it fills, folder registry included, so two builds
/// never share folders.
pub struct CollectionBuilder {
    base_url: String,
    policy: GroupingPolicy,
    collection: Collection,
}

impl CollectionBuilder {
    /// Create a new builder for the given configuration
    pub fn new(config: &ExportConfig) -> Self {
        debug!("Initializing CollectionBuilder for '{}'", config.collection_name);
        Self {
            base_url: config.base_url.clone(),
            policy: GroupingPolicy::new(config),
            collection: Collection::new(config.collection_name.clone()),
        }
    }

    /// Add one request per exported method of `route`; returns how many were added
    pub fn add_route(&mut self, route: &RouteDescriptor) -> usize {
        if self.policy.skips_route(route) {
            debug!("Skipping route: {} ({})", route.endpoint, route.rule);
            return 0;
        }

        let folder = self.policy.folder_for(route);
        if let Some(name) = folder {
            self.collection.get_folder(name);
        }

        let name = request_name(&route.endpoint);
        let url = rewrite_url(&self.base_url, &route.rule);
        let description = describe(route.doc.as_deref());

        let mut added = 0;
        for method in &route.methods {
            if self.policy.skips_method(method) {
                debug!("Skipping method {} of {}", method, route.endpoint);
                continue;
            }

            debug!("Adding request: {} {}", method, url);
            let request = Request::new(name.clone(), url.clone(), method.clone())
                .with_description(description.clone());
            self.collection.add_request(request, folder);
            added += 1;
        }
        added
    }

    /// Add every route, in order
    pub fn add_routes<'a, I>(&mut self, routes: I) -> usize
    where
        I: IntoIterator<Item = &'a RouteDescriptor>,
    {
        routes.into_iter().map(|route| self.add_route(route)).sum()
    }

    /// Finish building
    pub fn build(self) -> Collection {
        debug!(
            "Built collection with {} requests in {} folders",
            self.collection.request_count(),
            self.collection.folder_count()
        );
        self.collection
    }
}

/// Builds and renders the collection for `routes` in the configured schema version.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::error::Error::InvalidArgument) if the
/// configuration is invalid. An empty route list is not an error.
pub fn export_collection(routes: &[RouteDescriptor], config: &ExportConfig) -> Result<ExportDocument> {
    config.validate()?;

    let mut builder = CollectionBuilder::new(config);
    builder.add_routes(routes);
    let collection = builder.build();

    Ok(render(&collection, config.schema_version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::HttpMethod;

    fn folders_config() -> ExportConfig {
        ExportConfig {
            group_into_folders: true,
            ..ExportConfig::default()
        }
    }

    #[test]
    fn test_add_simple_route() {
        let mut builder = CollectionBuilder::new(&ExportConfig::default());
        let route = RouteDescriptor::new("patch_foo", "/foo/<int:id>", vec![HttpMethod::Patch]);

        assert_eq!(builder.add_route(&route), 1);

        let collection = builder.build();
        let request = collection.requests().next().unwrap();
        assert_eq!(request.name, "foo");
        assert_eq!(request.url, "{{base_url}}/foo/{{id}}");
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.description, "");
        assert!(request.folder().is_none());
    }

    #[test]
    fn test_one_request_per_method() {
        let mut builder = CollectionBuilder::new(&ExportConfig::default());
        let route = RouteDescriptor::new(
            "bar",
            "/bar",
            vec![HttpMethod::Put, HttpMethod::Get, HttpMethod::Post, HttpMethod::Head, HttpMethod::Options],
        );

        assert_eq!(builder.add_route(&route), 3);

        let methods: Vec<_> = builder.build().requests().map(|r| r.method.to_string()).collect();
        assert_eq!(methods, vec!["GET", "POST", "PUT"]);
    }

    #[test]
    fn test_options_and_head_when_included() {
        let config = ExportConfig {
            include_options_and_head: true,
            ..ExportConfig::default()
        };
        let mut builder = CollectionBuilder::new(&config);
        let route = RouteDescriptor::new("bar", "/bar", vec![HttpMethod::Options, HttpMethod::Head]);

        assert_eq!(builder.add_route(&route), 2);
    }

    #[test]
    fn test_static_route_is_skipped() {
        let mut builder = CollectionBuilder::new(&ExportConfig::default());
        let route = RouteDescriptor::new("static", "/static/<path:filename>", vec![HttpMethod::Get]);

        assert_eq!(builder.add_route(&route), 0);
        assert_eq!(builder.build().request_count(), 0);
    }

    #[test]
    fn test_description_is_normalized() {
        let mut builder = CollectionBuilder::new(&ExportConfig::default());
        let route = RouteDescriptor::new("get_foo", "/foo", vec![HttpMethod::Get])
            .with_doc("  Get some foo.\n\n  Returns:\n      A nice foo.");
        builder.add_route(&route);

        let collection = builder.build();
        let request = collection.requests().next().unwrap();
        assert_eq!(request.description, "Get some foo.\n\nReturns:\n    A nice foo.");
    }

    #[test]
    fn test_same_namespace_shares_one_folder() {
        let mut builder = CollectionBuilder::new(&folders_config());
        builder.add_routes(&[
            RouteDescriptor::new("baz.get_one", "/baz/one", vec![HttpMethod::Get]),
            RouteDescriptor::new("baz.get_two", "/baz/two", vec![HttpMethod::Get]),
        ]);

        let collection = builder.build();
        assert_eq!(collection.folder_count(), 1);
        let folder = collection.find_folder("baz").unwrap();
        assert_eq!(folder.len(), 2);
        assert_eq!(collection.top_level_requests().count(), 0);
    }

    #[test]
    fn test_folder_is_created_even_if_all_methods_are_skipped() {
        let mut builder = CollectionBuilder::new(&folders_config());
        builder.add_route(&RouteDescriptor::new("baz.ping", "/ping", vec![HttpMethod::Head]));

        let collection = builder.build();
        assert!(collection.find_folder("baz").unwrap().is_empty());
    }

    #[test]
    fn test_namespaced_routes_stay_top_level_without_grouping() {
        let mut builder = CollectionBuilder::new(&ExportConfig::default());
        builder.add_route(&RouteDescriptor::new("baz.get_one", "/baz/one", vec![HttpMethod::Get]));

        let collection = builder.build();
        assert_eq!(collection.folder_count(), 0);
        assert_eq!(collection.top_level_requests().count(), 1);
    }

    #[test]
    fn test_export_rejects_invalid_config() {
        let config = ExportConfig::named("");
        assert!(export_collection(&[], &config).is_err());
    }
}
