use crate::catalog::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The three filterable attribute categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetCategory {
    Ingredients,
    Appliances,
    Ustensils,
}

impl FacetCategory {
    /// Parse a category name from caller input. Both the plural form and the
    /// singular alias used by dropdown ids are accepted; anything else is
    /// unrecognized and the tag carrying it imposes no constraint.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ingredients" | "ingredient" => Some(FacetCategory::Ingredients),
            "appliances" | "appliance" => Some(FacetCategory::Appliances),
            "ustensils" | "ustensil" => Some(FacetCategory::Ustensils),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetCategory::Ingredients => "ingredients",
            FacetCategory::Appliances => "appliances",
            FacetCategory::Ustensils => "ustensils",
        }
    }
}

/// A facet value the user has committed to the active filter.
///
/// Identity is the `(item, category)` pair; duplicate tags are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedTag {
    pub item: String,
    pub category: String,
}

impl SelectedTag {
    pub fn new(item: impl Into<String>, category: impl Into<String>) -> Self {
        SelectedTag {
            item: item.into(),
            category: category.into(),
        }
    }

    /// Parse the textual `category:item[,category:item...]` form used by the
    /// CLI `--tags` flag and the HTTP `tags` query parameter. Entries
    /// without a `:` separator are skipped.
    pub fn parse_list(input: &str) -> Vec<SelectedTag> {
        input
            .split(',')
            .filter_map(|entry| {
                let (category, item) = entry.split_once(':')?;
                let category = category.trim();
                let item = item.trim();
                if category.is_empty() || item.is_empty() {
                    return None;
                }
                Some(SelectedTag::new(item, category))
            })
            .collect()
    }
}

/// The distinct, sorted values available per facet within a recipe
/// collection, used to populate the narrowing dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub ingredients: Vec<String>,
    pub appliances: Vec<String>,
    pub ustensils: Vec<String>,
}

#[derive(Debug, Default)]
struct TagBuckets<'a> {
    ingredients: Vec<&'a str>,
    appliances: Vec<&'a str>,
    ustensils: Vec<&'a str>,
}

fn bucket_tags<'a>(selected: &'a [SelectedTag]) -> TagBuckets<'a> {
    let mut buckets = TagBuckets::default();

    for tag in selected {
        // Unrecognized categories contribute no constraint
        match FacetCategory::parse(&tag.category) {
            Some(FacetCategory::Ingredients) => buckets.ingredients.push(&tag.item),
            Some(FacetCategory::Appliances) => buckets.appliances.push(&tag.item),
            Some(FacetCategory::Ustensils) => buckets.ustensils.push(&tag.item),
            None => {}
        }
    }

    buckets
}

fn recipe_matches(recipe: &Recipe, buckets: &TagBuckets<'_>) -> bool {
    let ingredients_match = buckets.ingredients.iter().all(|tag| {
        recipe
            .ingredients
            .iter()
            .any(|ing| ing.ingredient == *tag)
    });

    // A recipe has a single appliance: two distinct appliance tags can never
    // both match. That AND semantics is deliberate and kept as-is.
    let appliances_match = buckets
        .appliances
        .iter()
        .all(|tag| recipe.appliance.as_deref() == Some(*tag));

    let ustensils_match = buckets
        .ustensils
        .iter()
        .all(|tag| recipe.ustensils.iter().any(|ustensil| ustensil == tag));

    ingredients_match && appliances_match && ustensils_match
}

/// Keep the recipes carrying every selected tag, preserving collection
/// order. Tag comparison is case-sensitive exact match.
pub fn filter_by_tags(recipes: &[Recipe], selected: &[SelectedTag]) -> Vec<Recipe> {
    if selected.is_empty() {
        return recipes.to_vec();
    }

    let buckets = bucket_tags(selected);
    recipes
        .iter()
        .filter(|recipe| recipe_matches(recipe, &buckets))
        .cloned()
        .collect()
}

/// Collect the distinct facet values of a recipe collection, sorted
/// ascending per category.
pub fn compute_facet_options(recipes: &[Recipe]) -> FacetOptions {
    let mut ingredients = BTreeSet::new();
    let mut appliances = BTreeSet::new();
    let mut ustensils = BTreeSet::new();

    for recipe in recipes {
        for ing in &recipe.ingredients {
            ingredients.insert(ing.ingredient.clone());
        }
        if let Some(appliance) = &recipe.appliance {
            appliances.insert(appliance.clone());
        }
        for ustensil in &recipe.ustensils {
            ustensils.insert(ustensil.clone());
        }
    }

    FacetOptions {
        ingredients: ingredients.into_iter().collect(),
        appliances: appliances.into_iter().collect(),
        ustensils: ustensils.into_iter().collect(),
    }
}

/// Narrow an already-computed option list by a within-dropdown search
/// string (case-insensitive substring).
pub fn search_options(options: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return options.to_vec();
    }

    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeIngredient;

    fn recipe(id: i64, ingredients: &[&str], appliance: &str, ustensils: &[&str]) -> Recipe {
        Recipe {
            id,
            name: format!("Recette {id}"),
            description: String::new(),
            time: None,
            servings: None,
            appliance: Some(appliance.to_string()),
            ustensils: ustensils.iter().map(|s| s.to_string()).collect(),
            ingredients: ingredients
                .iter()
                .map(|name| RecipeIngredient {
                    ingredient: name.to_string(),
                    quantity: None,
                    unit: None,
                })
                .collect(),
            image: None,
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe(1, &["pomme", "sucre"], "four", &["moule", "couteau"]),
            recipe(2, &["poisson", "citron"], "grill", &["pince"]),
            recipe(3, &["pomme", "citron"], "four", &["couteau"]),
        ]
    }

    #[test]
    fn test_empty_tag_set_is_vacuous() {
        let recipes = sample();
        let out = filter_by_tags(&recipes, &[]);
        assert_eq!(out.len(), 3);
        let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_ingredient_tag() {
        let recipes = sample();
        let tags = vec![SelectedTag::new("pomme", "ingredients")];
        let ids: Vec<i64> = filter_by_tags(&recipes, &tags).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_tags_combine_across_categories() {
        let recipes = sample();
        let tags = vec![
            SelectedTag::new("pomme", "ingredients"),
            SelectedTag::new("moule", "ustensils"),
        ];
        let ids: Vec<i64> = filter_by_tags(&recipes, &tags).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_two_appliance_tags_never_match() {
        let recipes = sample();
        let tags = vec![
            SelectedTag::new("four", "appliances"),
            SelectedTag::new("grill", "appliances"),
        ];
        assert!(filter_by_tags(&recipes, &tags).is_empty());
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        let recipes = sample();
        let tags = vec![SelectedTag::new("Pomme", "ingredients")];
        assert!(filter_by_tags(&recipes, &tags).is_empty());
    }

    #[test]
    fn test_singular_category_alias() {
        let recipes = sample();
        let tags = vec![SelectedTag::new("grill", "appliance")];
        let ids: Vec<i64> = filter_by_tags(&recipes, &tags).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_unrecognized_category_is_ignored() {
        let recipes = sample();
        let tags = vec![SelectedTag::new("anything", "difficulty")];
        assert_eq!(filter_by_tags(&recipes, &tags).len(), 3);
    }

    #[test]
    fn test_duplicate_tags_are_noops() {
        let recipes = sample();
        let tags = vec![
            SelectedTag::new("pomme", "ingredients"),
            SelectedTag::new("pomme", "ingredients"),
        ];
        let ids: Vec<i64> = filter_by_tags(&recipes, &tags).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let recipes = sample();
        let tags = vec![SelectedTag::new("citron", "ingredients")];
        let once = filter_by_tags(&recipes, &tags);
        let twice = filter_by_tags(&once, &tags);
        let once_ids: Vec<i64> = once.iter().map(|r| r.id).collect();
        let twice_ids: Vec<i64> = twice.iter().map(|r| r.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_adding_a_tag_never_grows_the_result() {
        let recipes = sample();
        let mut tags = vec![SelectedTag::new("pomme", "ingredients")];
        let before = filter_by_tags(&recipes, &tags).len();
        tags.push(SelectedTag::new("couteau", "ustensils"));
        let after = filter_by_tags(&recipes, &tags).len();
        assert!(after <= before);
    }

    #[test]
    fn test_facet_options_are_sorted_and_distinct() {
        let recipes = sample();
        let options = compute_facet_options(&recipes);

        assert_eq!(options.ingredients, vec!["citron", "pomme", "poisson", "sucre"]);
        assert_eq!(options.appliances, vec!["four", "grill"]);
        assert_eq!(options.ustensils, vec!["couteau", "moule", "pince"]);
    }

    #[test]
    fn test_facet_options_of_subset_are_subset() {
        let recipes = sample();
        let all = compute_facet_options(&recipes);
        let filtered = filter_by_tags(&recipes, &[SelectedTag::new("four", "appliances")]);
        let narrowed = compute_facet_options(&filtered);

        for ing in &narrowed.ingredients {
            assert!(all.ingredients.contains(ing));
        }
        assert_eq!(narrowed.appliances, vec!["four"]);
    }

    #[test]
    fn test_facet_options_of_empty_collection() {
        let options = compute_facet_options(&[]);
        assert!(options.ingredients.is_empty());
        assert!(options.appliances.is_empty());
        assert!(options.ustensils.is_empty());
    }

    #[test]
    fn test_malformed_recipe_contributes_nothing() {
        let mut r = recipe(9, &[], "four", &[]);
        r.appliance = None;
        let options = compute_facet_options(&[r]);
        assert!(options.ingredients.is_empty());
        assert!(options.appliances.is_empty());
        assert!(options.ustensils.is_empty());
    }

    #[test]
    fn test_search_options() {
        let options = vec![
            "Pomme".to_string(),
            "Poisson".to_string(),
            "Citron".to_string(),
        ];
        assert_eq!(search_options(&options, "po"), vec!["Pomme", "Poisson"]);
        assert_eq!(search_options(&options, "CITRON"), vec!["Citron"]);
        assert_eq!(search_options(&options, ""), options);
        assert!(search_options(&options, "zz").is_empty());
    }

    #[test]
    fn test_category_parsing() {
        for category in [
            FacetCategory::Ingredients,
            FacetCategory::Appliances,
            FacetCategory::Ustensils,
        ] {
            assert_eq!(FacetCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(FacetCategory::parse("ustensil"), Some(FacetCategory::Ustensils));
        assert_eq!(FacetCategory::parse("Ingredients"), None);
        assert_eq!(FacetCategory::parse(""), None);
    }

    #[test]
    fn test_parse_tag_list() {
        let tags = SelectedTag::parse_list("ingredients:pomme, appliances:four");
        assert_eq!(
            tags,
            vec![
                SelectedTag::new("pomme", "ingredients"),
                SelectedTag::new("four", "appliances"),
            ]
        );

        // Entries without a separator are skipped
        assert!(SelectedTag::parse_list("pomme").is_empty());
        assert!(SelectedTag::parse_list("").is_empty());

        // Item values may themselves contain a colon
        let tags = SelectedTag::parse_list("ingredients:lait: entier");
        assert_eq!(tags, vec![SelectedTag::new("lait: entier", "ingredients")]);
    }
}
