//! Recipe search-and-filter engine.
//!
//! A fixed [`Catalog`] is indexed once into per-field inverted indexes and
//! completion tries ([`SearchIndex`]). A [`FilterEngine`] session then narrows
//! the visible recipes by free-text search and by ingredient, appliance and
//! ustensil tags, and reports which tag values are still worth offering.

pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod search;
pub mod server;
pub mod tools;

pub use catalog::{Catalog, Ingredient, Recipe, RecipeId};
pub use config::EngineConfig;
pub use error::{CatalogError, ConfigError};
pub use filter::{FilterEngine, FilterView, IdSet, Matches, SelectedFilters};
pub use search::{Category, SearchIndex, TagCategory, Trie};
