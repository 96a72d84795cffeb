use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::{
    api::models::*,
    catalog::Recipe,
    search::{compute_facet_options, search_options, FacetOptions, SearchEngine, SelectedTag},
    Error, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    pub settings: crate::config::Settings,
}

fn parse_tags(tags: Option<&str>) -> Vec<SelectedTag> {
    tags.map(SelectedTag::parse_list).unwrap_or_default()
}

fn cap_facets(mut facets: FacetOptions, max: usize) -> FacetOptions {
    facets.ingredients.truncate(max);
    facets.appliances.truncate(max);
    facets.ustensils.truncate(max);
    facets
}

/// GET /api/search - Combined keyword + tag search
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    debug!("Search request: {:?}", params);

    let tags = parse_tags(params.tags.as_deref());
    let output = state.engine.query(&params.q, &tags);

    let results: Vec<RecipeCard> = output.results.iter().map(RecipeCard::from).collect();
    let facets = cap_facets(
        output.facet_options,
        state.settings.search.max_facet_values,
    );

    Ok(Json(SearchResponse {
        total: results.len(),
        results,
        facets,
    }))
}

/// GET /api/recipes/:id - Full recipe record
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>> {
    debug!("Get recipe request: {}", id);

    state
        .engine
        .catalog()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))
}

/// GET /api/facets - Remaining facet options for the current filter state
pub async fn get_facets(
    State(state): State<AppState>,
    Query(params): Query<FacetParams>,
) -> Result<Json<FacetOptions>> {
    debug!("Facets request: {:?}", params);

    let tags = parse_tags(params.tags.as_deref());
    let output = state.engine.query(&params.q, &tags);

    let mut facets = output.facet_options;
    if !params.contains.is_empty() {
        facets = FacetOptions {
            ingredients: search_options(&facets.ingredients, &params.contains),
            appliances: search_options(&facets.appliances, &params.contains),
            ustensils: search_options(&facets.ustensils, &params.contains),
        };
    }

    Ok(Json(cap_facets(
        facets,
        state.settings.search.max_facet_values,
    )))
}

/// GET /api/stats - Catalog statistics
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let recipes = &state.engine.catalog().recipes;
    let options = compute_facet_options(recipes);

    Ok(Json(StatsResponse {
        recipes: recipes.len(),
        ingredients: options.ingredients.len(),
        appliances: options.appliances.len(),
        ustensils: options.ustensils.len(),
    }))
}

/// GET /health - Liveness check
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
