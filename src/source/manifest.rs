use super::{RouteDescriptor, RouteSource};
use crate::error::{Error, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Route source backed by a manifest file written by a route discovery step.
///
/// The manifest is either a bare array of routes or an object with a `routes` array. Each
/// route looks like:
///
/// ```json
/// { "endpoint": "users.get_user", "rule": "/users/<int:id>", "methods": ["GET"], "doc": "..." }
/// ```
///
/// Files ending in `.json` are read as JSON, files ending in `.yaml`/`.yml` as YAML; any
/// other name is tried as JSON first and then as YAML.
///
/// # Example
///
/// ```no_run
/// use postman_from_routes::source::{RouteSource, manifest::ManifestSource};
/// use std::path::PathBuf;
///
/// let source = ManifestSource::new(PathBuf::from("routes.yaml"));
/// for route in source.routes().unwrap() {
///     println!("{} {}", route.endpoint, route.rule);
/// }
/// ```
pub struct ManifestSource {
    path: PathBuf,
    /// Content already read from somewhere other than `path` (stdin)
    content: Option<String>,
}

/// Manifest written as an object with a `routes` array
#[derive(Deserialize)]
struct WrappedManifest {
    routes: Vec<RouteDescriptor>,
}

/// Whether the manifest's top-level value is a sequence (`[` in JSON or flow YAML, `-` in
/// block YAML) rather than a mapping
fn is_route_list(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#') && *line != "---")
        .is_some_and(|line| line.starts_with('[') || line == "-" || line.starts_with("- "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Json,
    Yaml,
    Unknown,
}

impl ManifestSource {
    /// Creates a source reading the manifest at `path` when routes are requested.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            content: None,
        }
    }

    /// Reads a whole manifest from `reader` (typically stdin) up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteSourceUnavailable`] if the reader fails.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| Error::RouteSourceUnavailable(format!("cannot read <stdin>: {}", e)))?;
        Ok(Self {
            path: PathBuf::from("<stdin>"),
            content: Some(content),
        })
    }

    /// The manifest location, used in messages
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> ManifestFormat {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ManifestFormat::Yaml
            }
            _ => ManifestFormat::Unknown,
        }
    }

    fn read(&self) -> Result<String> {
        if let Some(content) = &self.content {
            return Ok(content.clone());
        }

        debug!("Reading route manifest: {}", self.path.display());
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => Error::RouteSourceUnavailable(
                format!("cannot read {}: {}", self.path.display(), e),
            ),
            _ if self.path.is_dir() => Error::RouteSourceUnavailable(format!(
                "{} is a directory, not a route manifest",
                self.path.display()
            )),
            _ => Error::IoError(e),
        })
    }

    fn parse(&self, content: &str) -> Result<Vec<RouteDescriptor>> {
        if is_route_list(content) {
            self.parse_as::<Vec<RouteDescriptor>>(content)
        } else {
            Ok(self.parse_as::<WrappedManifest>(content)?.routes)
        }
    }

    fn parse_as<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        let parse_error = |message: String| Error::ParseError {
            file: self.path.clone(),
            message,
        };

        match self.format() {
            ManifestFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ManifestFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ManifestFormat::Unknown => serde_json::from_str(content).or_else(|json_err| {
                debug!("Manifest is not JSON ({}), trying YAML", json_err);
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }),
        }
    }
}

impl RouteSource for ManifestSource {
    fn routes(&self) -> Result<Vec<RouteDescriptor>> {
        let content = self.read()?;
        let routes = self.parse(&content)?;

        if routes.is_empty() {
            warn!("Route manifest {} lists no routes", self.path.display());
        } else {
            debug!("Loaded {} routes from {}", routes.len(), self.path.display());
        }

        Ok(routes)
    }
}
