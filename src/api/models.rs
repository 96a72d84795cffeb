use crate::catalog::Recipe;
use crate::search::FacetOptions;
use serde::{Deserialize, Serialize};

/// Search request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text keyword; fewer than 3 characters means no keyword filter
    #[serde(default)]
    pub q: String,
    /// Selected tags as `category:item[,category:item...]`
    pub tags: Option<String>,
}

/// Search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<RecipeCard>,
    pub total: usize,
    pub facets: FacetOptions,
}

/// Recipe card for search results
#[derive(Debug, Clone, Serialize)]
pub struct RecipeCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub time: Option<i64>,
    pub servings: Option<i64>,
    pub image: Option<String>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        RecipeCard {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            time: recipe.time,
            servings: recipe.servings,
            image: recipe.image.clone(),
        }
    }
}

/// Facet request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct FacetParams {
    /// Free-text keyword the facets should reflect
    #[serde(default)]
    pub q: String,
    /// Selected tags as `category:item[,category:item...]`
    pub tags: Option<String>,
    /// Within-dropdown narrowing: only values containing this substring
    #[serde(default)]
    pub contains: String,
}

/// Catalog statistics
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub recipes: usize,
    pub ingredients: usize,
    pub appliances: usize,
    pub ustensils: usize,
}
