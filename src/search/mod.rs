//! The search pipeline: keyword matching, tag filtering and facet
//! reduction, combined by the query coordinator.
//!
//! Every function here is pure and synchronous: the caller passes the
//! recipe collection in, results come back as fresh collections. The only
//! stateful piece is the optional memoization in [`engine::SearchEngine`].

pub mod engine;
pub mod facets;
pub mod keyword;
pub mod query;

pub use engine::SearchEngine;
pub use facets::{
    compute_facet_options, filter_by_tags, search_options, FacetCategory, FacetOptions,
    SelectedTag,
};
pub use keyword::{apply_keyword, keyword_matches, MIN_KEYWORD_LEN};
pub use query::{run_query, QueryOutput};
