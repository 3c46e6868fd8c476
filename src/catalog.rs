//! Immutable in-memory recipe catalog.

use crate::error::CatalogError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stable recipe identifier.
pub type RecipeId = u32;

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// A recipe record as supplied by the data source.
///
/// All fields except ingredient quantities and units are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Preparation time in minutes.
    pub time: u32,
    pub ingredients: Vec<Ingredient>,
    pub appliance: String,
    pub ustensils: Vec<String>,
    pub description: String,
}

/// Recipes keyed by id, plus load order.
#[derive(Debug, Default)]
pub struct Catalog {
    by_id: AHashMap<RecipeId, Recipe>,
    all_ids: Vec<RecipeId>,
}

impl Catalog {
    /// Builds a catalog, keeping the iteration order of `recipes`.
    pub fn new(recipes: impl IntoIterator<Item = Recipe>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for recipe in recipes {
            let id = recipe.id;
            if catalog.by_id.insert(id, recipe).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
            catalog.all_ids.push(id);
        }
        Ok(catalog)
    }

    /// Parses a JSON array of recipe records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Reads and parses a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded {} recipes from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All ids in load order.
    pub fn ids(&self) -> &[RecipeId] {
        &self.all_ids
    }

    /// Recipes in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.all_ids.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }
}
