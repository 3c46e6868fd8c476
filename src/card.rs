//! Card view model handed to the rendering layer.

use crate::catalog::{Ingredient, Recipe, RecipeId};

/// Shown in place of cards when no recipe is visible.
pub const NO_RESULTS_HINT: &str = "No recipe matches your criteria. \
     You can search for \"apple pie\", \"soup\", etc.";

/// Display data of one recipe card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: RecipeId,
    pub name: String,
    pub time_minutes: u32,
    pub ingredient_lines: Vec<String>,
    pub description: String,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            time_minutes: recipe.time,
            ingredient_lines: recipe.ingredients.iter().map(ingredient_line).collect(),
            description: recipe.description.clone(),
        }
    }
}

/// `"Flour: 250 g"`, `"Eggs: 2"` or just `"Salt"`.
pub fn ingredient_line(entry: &Ingredient) -> String {
    match (entry.quantity, entry.unit.as_deref()) {
        (Some(quantity), Some(unit)) if !unit.is_empty() => {
            format!("{}: {} {}", entry.ingredient, format_quantity(quantity), unit)
        }
        (Some(quantity), _) => format!("{}: {}", entry.ingredient, format_quantity(quantity)),
        (None, _) => entry.ingredient.clone(),
    }
}

/// Integral quantities print without a fractional part.
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{:.0}", quantity)
    } else {
        quantity.to_string()
    }
}
