use crate::config::{ExportConfig, SchemaVersion, DEFAULT_BASE_URL, DEFAULT_COLLECTION_NAME};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Path that makes the route manifest be read from stdin
pub const STDIN_PATH: &str = "-";

/// Postman From Routes - Generate a Postman collection from an application's routes
#[derive(Parser, Debug)]
#[command(name = "postman-from-routes")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Route manifest (JSON or YAML) produced by route discovery, or "-" for stdin
    #[arg(value_name = "ROUTES")]
    pub manifest_path: PathBuf,

    /// Postman collection name (default: current directory name)
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// The base of every URL
    #[arg(short = 'b', long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Also generate OPTIONS/HEAD methods
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Also generate the static files route
    #[arg(short = 's', long = "static")]
    pub static_route: bool,

    /// Indent the output
    #[arg(short = 'i', long = "indent")]
    pub indent: bool,

    /// Add Postman folders for route namespaces
    #[arg(short = 'f', long = "folders")]
    pub folders: bool,

    /// Collection schema version
    #[arg(long = "schema", value_enum, default_value = "v1")]
    pub schema: SchemaVersion,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// Whether routes are read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.manifest_path == Path::new(STDIN_PATH)
    }

    /// Export configuration described by the arguments
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            base_url: self.base_url.clone(),
            include_options_and_head: self.all,
            include_static_route: self.static_route,
            group_into_folders: self.folders,
            schema_version: self.schema,
            collection_name: self.name.clone().unwrap_or_else(default_collection_name),
            pretty_print: self.indent,
        }
    }
}

/// Name of the current directory, used when no collection name is given
fn default_collection_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.to_string())
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if let Some(name) = &args.name {
        if name.trim().is_empty() {
            anyhow::bail!("Collection name must not be empty");
        }
    }

    if !args.reads_stdin() && args.manifest_path.is_dir() {
        anyhow::bail!(
            "Route manifest is a directory: {}",
            args.manifest_path.display()
        );
    }

    if args.reads_stdin() {
        info!("Routes: stdin");
    } else {
        info!("Routes: {}", args.manifest_path.display());
    }
    info!("Schema: {:?}", args.schema);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::collection_builder::export_collection;
    use crate::serializer::{serialize_document, write_to_file};
    use crate::source::manifest::ManifestSource;
    use crate::source::RouteSource;

    let config = args.export_config();

    // Step 1: Load routes
    info!("Loading routes...");
    let source = if args.reads_stdin() {
        ManifestSource::from_reader(std::io::stdin().lock())?
    } else {
        ManifestSource::new(args.manifest_path.clone())
    };
    let routes = source.routes()?;
    info!("Loaded {} routes", routes.len());

    if routes.is_empty() {
        log::warn!("No routes found, the collection will be empty");
    }

    // Step 2: Build and render the collection
    info!("Building collection '{}'...", config.collection_name);
    let document = export_collection(&routes, &config)?;

    // Step 3: Serialize
    let content = serialize_document(&document, config.pretty_print)
        .context("Failed to serialize collection")?;

    // Step 4: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)
            .with_context(|| format!("Failed to write to file: {}", output_path.display()))?;
    } else {
        println!("{}", content);
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Routes read: {}", routes.len());
    info!("  - Requests exported: {}", document.request_count());
    info!("  - Folders: {}", document.folder_count());
    info!("  - Schema: {:?}", document.schema_version());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["postman-from-routes"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["routes.json"]);
        let config = args.export_config();

        assert_eq!(config.base_url, "{{base_url}}");
        assert_eq!(config.schema_version, SchemaVersion::V1);
        assert!(!config.include_options_and_head);
        assert!(!config.include_static_route);
        assert!(!config.group_into_folders);
        assert!(!config.pretty_print);
        assert!(!config.collection_name.is_empty());
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = parse(&[
            "routes.yaml", "-n", "My API", "-b", "http://localhost:5000", "-a", "-s", "-i", "-f",
            "--schema", "v2",
        ]);
        let config = args.export_config();

        assert_eq!(config.collection_name, "My API");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert!(config.include_options_and_head);
        assert!(config.include_static_route);
        assert!(config.pretty_print);
        assert!(config.group_into_folders);
        assert_eq!(config.schema_version, SchemaVersion::V2);
    }

    #[test]
    fn test_stdin_marker() {
        assert!(parse(&["-"]).reads_stdin());
        assert!(!parse(&["routes.json"]).reads_stdin());
    }

    #[test]
    fn test_unknown_schema_is_rejected() {
        assert!(CliArgs::try_parse_from(["postman-from-routes", "r.json", "--schema", "v3"]).is_err());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let args = parse(&["routes.json", "--name", " "]);
        assert!(parse_args_from_parsed(args).is_err());
    }
}
