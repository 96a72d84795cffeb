use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A recipe record as stored in the catalog file.
///
/// Recipes are read-only inputs to the search pipeline. Optional fields
/// tolerate malformed records: a missing `appliance` simply never matches an
/// appliance tag, missing `ingredients`/`ustensils` contribute no facet
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub time: Option<i64>,
    pub servings: Option<i64>,
    pub appliance: Option<String>,
    #[serde(default)]
    pub ustensils: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// The catalog document layout: `{ "recipes": [...] }`.
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

/// The in-memory recipe collection the search pipeline runs against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;

        info!(
            "Loaded catalog: {} recipes from {}",
            catalog.recipes.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Catalog {
            recipes: file.recipes,
        })
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by its catalog id
    pub fn get(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}
