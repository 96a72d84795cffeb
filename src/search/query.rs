use crate::catalog::Recipe;
use crate::search::facets::{compute_facet_options, filter_by_tags, FacetOptions, SelectedTag};
use crate::search::keyword::apply_keyword;
use serde::{Deserialize, Serialize};

/// The two outputs the UI layer needs from one query evaluation: the
/// surviving recipes and the facet values still available within them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutput {
    pub results: Vec<Recipe>,
    pub facet_options: FacetOptions,
}

/// Evaluate one combined query against a recipe collection.
///
/// Keyword filtering runs first, tag filtering second, on the
/// keyword-filtered subset. The order matters: facet options must reflect
/// recipes that already satisfy the keyword. Inputs are never mutated; a
/// fresh collection comes back on every call.
pub fn run_query(recipes: &[Recipe], keyword: &str, selected: &[SelectedTag]) -> QueryOutput {
    let keyword_filtered = apply_keyword(recipes, keyword);
    let results = filter_by_tags(&keyword_filtered, selected);
    let facet_options = compute_facet_options(&results);

    QueryOutput {
        results,
        facet_options,
    }
}
