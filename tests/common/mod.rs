//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `engine`: a session over the sample catalog in `data/recipes.json`
//! - `blender_oven_engine`: the two-recipe catalog (Blender/Apple, Oven/Banana)
//! - `empty_engine`: a session over an empty catalog

#![allow(dead_code)] // Used across different integration test crates

use recipe_finder::{Catalog, EngineConfig, FilterEngine, Ingredient, Recipe, RecipeId};
use rstest::fixture;

/// The sample catalog shipped with the binary.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("../../data/recipes.json"))
        .expect("sample catalog should parse")
}

/// Builds a recipe with the given tag values and free text.
pub fn recipe(
    id: RecipeId,
    name: &str,
    ingredients: &[&str],
    appliance: &str,
    ustensils: &[&str],
    description: &str,
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        time: 15,
        ingredients: ingredients
            .iter()
            .map(|name| Ingredient {
                ingredient: name.to_string(),
                quantity: None,
                unit: None,
            })
            .collect(),
        appliance: appliance.to_string(),
        ustensils: ustensils.iter().map(|u| u.to_string()).collect(),
        description: description.to_string(),
    }
}

pub fn engine_over(recipes: Vec<Recipe>) -> FilterEngine {
    recipe_finder::logging::init_for_tests();
    let catalog = Catalog::new(recipes).expect("fixture ids are unique");
    FilterEngine::from_catalog(catalog, EngineConfig::default())
}

#[fixture]
pub fn engine() -> FilterEngine {
    recipe_finder::logging::init_for_tests();
    FilterEngine::from_catalog(sample_catalog(), EngineConfig::default())
}

#[fixture]
pub fn blender_oven_engine() -> FilterEngine {
    engine_over(vec![
        recipe(1, "Smoothie", &["Apple"], "Blender", &[], "Blend."),
        recipe(2, "Bake", &["Banana"], "Oven", &[], "Bake."),
    ])
}

#[fixture]
pub fn empty_engine() -> FilterEngine {
    engine_over(Vec::new())
}
