use crate::catalog::Catalog;
use crate::search::{run_query, search_options, FacetOptions, QueryOutput, SelectedTag};
use crate::Result;
use std::path::Path;

/// Search the catalog and print the results
pub fn search(catalog_path: &Path, query: &str, tags: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::from_file(catalog_path)?;
    let selected = tags.map(SelectedTag::parse_list).unwrap_or_default();

    let output = run_query(&catalog.recipes, query, &selected);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_search_results(&output);
    Ok(())
}

fn print_search_results(output: &QueryOutput) {
    if output.results.is_empty() {
        println!("No recipes found");
        return;
    }

    println!(
        "Found {} recipe{}:",
        output.results.len(),
        if output.results.len() == 1 { "" } else { "s" }
    );

    for recipe in &output.results {
        let time = recipe
            .time
            .map(|t| format!("{t} min"))
            .unwrap_or_else(|| "-".to_string());
        println!("  [{}] {} ({})", recipe.id, recipe.name, time);
    }

    println!(
        "\nRemaining filters: {} ingredients, {} appliances, {} ustensils",
        output.facet_options.ingredients.len(),
        output.facet_options.appliances.len(),
        output.facet_options.ustensils.len()
    );
}

/// List the facet values available for a filter state
pub fn facets(
    catalog_path: &Path,
    query: &str,
    tags: Option<&str>,
    contains: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::from_file(catalog_path)?;
    let selected = tags.map(SelectedTag::parse_list).unwrap_or_default();

    let output = run_query(&catalog.recipes, query, &selected);
    let mut options = output.facet_options;

    if let Some(contains) = contains {
        options = FacetOptions {
            ingredients: search_options(&options.ingredients, contains),
            appliances: search_options(&options.appliances, contains),
            ustensils: search_options(&options.ustensils, contains),
        };
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    print_facet_list("Ingredients", &options.ingredients);
    print_facet_list("Appliances", &options.appliances);
    print_facet_list("Ustensils", &options.ustensils);
    Ok(())
}

fn print_facet_list(label: &str, values: &[String]) {
    println!("{} ({}):", label, values.len());
    for value in values {
        println!("  {value}");
    }
}

/// Check that a catalog file parses and report its shape
pub fn validate(path: &Path) -> Result<()> {
    let catalog = Catalog::from_file(path)?;

    let missing_appliance = catalog
        .recipes
        .iter()
        .filter(|r| r.appliance.is_none())
        .count();
    let missing_ingredients = catalog
        .recipes
        .iter()
        .filter(|r| r.ingredients.is_empty())
        .count();

    println!("✓ Valid catalog: {} recipes", catalog.len());
    if missing_appliance > 0 {
        println!("  {missing_appliance} recipes without an appliance");
    }
    if missing_ingredients > 0 {
        println!("  {missing_ingredients} recipes without ingredients");
    }

    Ok(())
}
