//! Inverted indexes and field tries built once from the catalog.

use super::tokenize::{normalize, split_words};
use super::trie::Trie;
use crate::catalog::{Catalog, Recipe, RecipeId};
use crate::filter::IdSet;
use ahash::AHashMap;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An indexed field of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ingredients,
    Appliances,
    Ustensils,
    TitleWords,
    DescriptionWords,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Ingredients,
        Self::Appliances,
        Self::Ustensils,
        Self::TitleWords,
        Self::DescriptionWords,
    ];

    /// Fields consulted by free-text search.
    pub const FREE_TEXT: [Self; 3] = [Self::Ingredients, Self::TitleWords, Self::DescriptionWords];

    const fn slot(self) -> usize {
        match self {
            Self::Ingredients => 0,
            Self::Appliances => 1,
            Self::Ustensils => 2,
            Self::TitleWords => 3,
            Self::DescriptionWords => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ingredients => "ingredients",
            Self::Appliances => "appliances",
            Self::Ustensils => "ustensils",
            Self::TitleWords => "titleWords",
            Self::DescriptionWords => "descriptionWords",
        }
    }

    /// Tokens `recipe` contributes to this field, in field order, duplicates kept.
    pub fn tokens(self, recipe: &Recipe) -> Vec<String> {
        match self {
            Self::Ingredients => recipe
                .ingredients
                .iter()
                .map(|entry| normalize(&entry.ingredient))
                .collect(),
            Self::Appliances => vec![normalize(&recipe.appliance)],
            Self::Ustensils => recipe.ustensils.iter().map(|u| normalize(u)).collect(),
            Self::TitleWords => split_words(&recipe.name),
            Self::DescriptionWords => split_words(&recipe.description),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field the user can filter on with tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Ingredients,
    Appliances,
    Ustensils,
}

impl TagCategory {
    pub const ALL: [Self; 3] = [Self::Ingredients, Self::Appliances, Self::Ustensils];

    pub const fn category(self) -> Category {
        match self {
            Self::Ingredients => Category::Ingredients,
            Self::Appliances => Category::Appliances,
            Self::Ustensils => Category::Ustensils,
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.category().as_str()
    }

    /// Heading shown above the category's dropdown.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ingredients => "Ingredients",
            Self::Appliances => "Appliances",
            Self::Ustensils => "Utensils",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" | "ingredient" => Ok(Self::Ingredients),
            "appliances" | "appliance" => Ok(Self::Appliances),
            "ustensils" | "ustensil" | "utensils" | "utensil" => Ok(Self::Ustensils),
            other => Err(format!(
                "unknown category '{}' (expected ingredients, appliances or ustensils)",
                other
            )),
        }
    }
}

/// Token to posting set for one field.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, IdSet>,
    /// Tokens in first-seen order.
    vocabulary: Vec<String>,
}

impl InvertedIndex {
    fn add(&mut self, token: String, id: RecipeId) {
        match self.postings.get_mut(&token) {
            Some(ids) => {
                ids.insert(id);
            }
            None => {
                self.vocabulary.push(token.clone());
                self.postings.insert(token, IdSet::from_iter([id]));
            }
        }
    }

    /// Posting set for a normalized token.
    pub fn postings(&self, token: &str) -> Option<&IdSet> {
        self.postings.get(token)
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Get the number of unique terms in the index
    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Inverted index and completion trie of one field.
#[derive(Debug, Clone, Default)]
pub struct FieldIndex {
    index: InvertedIndex,
    trie: Trie,
}

impl FieldIndex {
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Ids of recipes holding any token that completes `prefix`.
    pub fn matches(&self, prefix: &str) -> IdSet {
        let mut ids = IdSet::default();
        for token in self.trie.complete(prefix) {
            if let Some(postings) = self.index.postings(&token) {
                ids.union_with(postings);
            }
        }
        ids
    }
}

/// All search structures derived from a catalog. Immutable once built.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    fields: [FieldIndex; 5],
    /// Recipe names, each inserted as a phrase.
    names: Trie,
    /// Lowercased recipe name to the name as written.
    display_names: AHashMap<String, String>,
}

impl SearchIndex {
    /// Indexes every recipe of `catalog` in catalog order.
    pub fn build(catalog: &Catalog) -> Self {
        let start = std::time::Instant::now();
        let mut fields: [FieldIndex; 5] = Default::default();
        let mut names = Trie::new();
        let mut display_names = AHashMap::with_capacity(catalog.len());

        for recipe in catalog.iter() {
            for category in Category::ALL {
                let field = &mut fields[category.slot()];
                for token in category.tokens(recipe) {
                    field.index.add(token, recipe.id);
                }
            }
            names.insert_phrase(&recipe.name);
            display_names
                .entry(recipe.name.to_lowercase())
                .or_insert_with(|| recipe.name.clone());
        }

        for field in &mut fields {
            for token in &field.index.vocabulary {
                field.trie.insert_phrase(token);
            }
        }

        let index = Self {
            fields,
            names,
            display_names,
        };

        tracing::info!(
            "Built search index for {} recipes: {} ingredients, {} appliances, {} ustensils, \
             {} title words, {} description words in {:?}",
            catalog.len(),
            index.term_count(Category::Ingredients),
            index.term_count(Category::Appliances),
            index.term_count(Category::Ustensils),
            index.term_count(Category::TitleWords),
            index.term_count(Category::DescriptionWords),
            start.elapsed()
        );

        index
    }

    pub fn field(&self, category: Category) -> &FieldIndex {
        &self.fields[category.slot()]
    }

    pub fn vocabulary(&self, category: Category) -> &[String] {
        self.field(category).index.vocabulary()
    }

    pub fn postings(&self, category: Category, token: &str) -> Option<&IdSet> {
        self.field(category).index.postings(token)
    }

    pub fn complete(&self, category: Category, prefix: &str) -> Vec<String> {
        self.field(category).trie.complete(prefix)
    }

    pub fn term_count(&self, category: Category) -> usize {
        self.field(category).index.term_count()
    }

    /// Recipe names completing `prefix`, as written in the catalog, first-seen order.
    pub fn complete_names(&self, prefix: &str) -> Vec<String> {
        let mut seen = ahash::AHashSet::new();
        self.names
            .complete(prefix)
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .filter_map(|name| self.display_names.get(&name).cloned())
            .collect()
    }
}
