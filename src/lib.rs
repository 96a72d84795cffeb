pub mod catalog;
pub mod config;
pub mod error;

// Core search pipeline
pub mod search;

// HTTP API
pub mod api;

// CLI
pub mod cli;

// Re-exports
pub use catalog::{Recipe, RecipeIngredient};
pub use config::Settings;
pub use error::{Error, Result};
pub use search::{
    apply_keyword, compute_facet_options, filter_by_tags, run_query, FacetCategory, FacetOptions,
    QueryOutput, SelectedTag,
};
