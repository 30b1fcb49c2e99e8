//! Postman From Routes - Command-line tool for generating Postman collections.
//!
//! This binary reads the routes of a web application from a manifest written by a route
//! discovery step and prints an importable Postman collection (schema v1 or v2.1).
//!
//! # Usage
//!
//! ```bash
//! postman-from-routes [OPTIONS] <ROUTES>
//! ```
//!
//! # Examples
//!
//! Generate a v1 collection:
//! ```bash
//! postman-from-routes routes.json -n "My API" > collection.json
//! ```
//!
//! Generate an indented v2.1 collection with one folder per namespace:
//! ```bash
//! postman-from-routes routes.yaml --schema v2 -f -i -o collection.json
//! ```
//!
//! Read routes from stdin with verbose logging:
//! ```bash
//! discover-routes | postman-from-routes - -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use postman_from_routes::cli;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    // Logging goes to stderr; stdout only carries the collection
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Postman From Routes starting...");

    let args = cli::parse_args_from_parsed(args)?;

    cli::run(args)?;

    info!("Collection generation completed successfully");

    Ok(())
}
