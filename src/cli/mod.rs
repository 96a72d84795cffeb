// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plats")]
#[command(about = "Recipe search and facet filtering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the search API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Catalog file to serve
        #[arg(long, env = "CATALOG_PATH")]
        catalog: Option<PathBuf>,
    },

    /// Search the catalog
    Search {
        /// Search keyword (fewer than 3 characters matches everything)
        #[arg(default_value = "")]
        query: String,

        /// Selected tags as category:item[,category:item...]
        #[arg(long)]
        tags: Option<String>,

        /// Catalog file to search
        #[arg(long, env = "CATALOG_PATH")]
        catalog: Option<PathBuf>,

        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List the facet values available for a filter state
    Facets {
        /// Search keyword the facets should reflect
        #[arg(long, default_value = "")]
        query: String,

        /// Selected tags as category:item[,category:item...]
        #[arg(long)]
        tags: Option<String>,

        /// Only show values containing this substring
        #[arg(long)]
        contains: Option<String>,

        /// Catalog file to read
        #[arg(long, env = "CATALOG_PATH")]
        catalog: Option<PathBuf>,

        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Check that a catalog file parses
    Validate {
        /// Catalog file path
        path: PathBuf,
    },
}
