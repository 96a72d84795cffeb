use crate::catalog::Recipe;

/// Keywords shorter than this many characters impose no filter at all.
/// This is the minimum-length policy of the search bar, not an error.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Does this recipe textually match the keyword?
///
/// Case-insensitive substring probe against the name, description,
/// ingredient names, appliance and utensils, in that order, short-circuiting
/// on the first hit. Keywords below [`MIN_KEYWORD_LEN`] match everything.
pub fn keyword_matches(recipe: &Recipe, keyword: &str) -> bool {
    if keyword.chars().count() < MIN_KEYWORD_LEN {
        return true;
    }

    matches_lowered(recipe, &keyword.to_lowercase())
}

// Invariant: `needle` is already lowercased and at least MIN_KEYWORD_LEN
// characters.
fn matches_lowered(recipe: &Recipe, needle: &str) -> bool {
    recipe.name.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|ing| ing.ingredient.to_lowercase().contains(needle))
        || recipe
            .appliance
            .as_deref()
            .map_or(false, |appliance| appliance.to_lowercase().contains(needle))
        || recipe
            .ustensils
            .iter()
            .any(|ustensil| ustensil.to_lowercase().contains(needle))
}

/// Keep the recipes matching the keyword, preserving collection order.
pub fn apply_keyword(recipes: &[Recipe], keyword: &str) -> Vec<Recipe> {
    if keyword.chars().count() < MIN_KEYWORD_LEN {
        return recipes.to_vec();
    }

    let needle = keyword.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_lowered(recipe, &needle))
        .cloned()
        .collect()
}
