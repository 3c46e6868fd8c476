//! Filter engine: combines tag selections and free-text search into the
//! visible recipe set and the options each dropdown may still offer.
//!
//! Every operation runs to completion on the caller's thread. Mutating calls
//! return a fresh [`FilterView`]; the UI layer decides how to wire them to
//! its own events.

mod matches;
mod selection;

pub use matches::{IdSet, Matches, intersect_all, intersection};
pub use selection::SelectedFilters;

use crate::catalog::{Catalog, RecipeId};
use crate::config::EngineConfig;
use crate::search::{Category, SearchIndex, TagCategory};
use ahash::AHashSet;
use std::sync::Arc;

/// Everything a renderer needs after a change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterView {
    /// Recipes to show, in display order. Empty means "no results".
    pub visible_ids: Vec<RecipeId>,
    pub ingredients: Vec<String>,
    pub appliances: Vec<String>,
    pub ustensils: Vec<String>,
}

impl FilterView {
    /// Remaining options of `category`.
    pub fn options(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Ingredients => &self.ingredients,
            TagCategory::Appliances => &self.appliances,
            TagCategory::Ustensils => &self.ustensils,
        }
    }
}

/// Search session over a shared catalog and index.
///
/// Cheap to create: the catalog and index are shared, only the selection and
/// query are owned. Independent engines never observe each other's state.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Arc<Catalog>,
    index: Arc<SearchIndex>,
    config: EngineConfig,
    selected: SelectedFilters,
    query: String,
}

impl FilterEngine {
    pub fn new(catalog: Arc<Catalog>, index: Arc<SearchIndex>, config: EngineConfig) -> Self {
        Self {
            catalog,
            index,
            config,
            selected: SelectedFilters::new(),
            query: String::new(),
        }
    }

    /// Builds the index for `catalog` and starts a session over it.
    pub fn from_catalog(catalog: Catalog, config: EngineConfig) -> Self {
        let index = SearchIndex::build(&catalog);
        Self::new(Arc::new(catalog), Arc::new(index), config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn selected(&self) -> &SelectedFilters {
        &self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Recipes matching every selected tag of `category`.
    ///
    /// With nothing selected the category is unconstrained. Otherwise the
    /// posting sets of the selected tokens are intersected in selection order,
    /// so the result follows the first token's posting order. A token absent
    /// from the category's index matches nothing.
    pub fn filter_by_category(&self, category: TagCategory) -> Matches {
        let tokens = self.selected.tokens(category);
        if tokens.is_empty() {
            return Matches::All;
        }

        let empty = IdSet::default();
        let postings = tokens.iter().map(|token| {
            self.index
                .postings(category.category(), token)
                .unwrap_or(&empty)
        });
        Matches::Only(intersection(postings).unwrap_or_default())
    }

    /// Recipes matching `query` by ingredient, title word or description word.
    ///
    /// Queries shorter than `min_query_len` (after trimming) are unconstrained.
    pub fn search_free_text(&self, query: &str) -> Matches {
        let query = query.trim();
        if query.chars().count() < self.config.min_query_len {
            return Matches::All;
        }

        let mut ids = IdSet::default();
        for category in Category::FREE_TEXT {
            ids.union_with(&self.index.field(category).matches(query));
        }
        tracing::debug!("Free-text search '{}' matched {} recipes", query, ids.len());
        Matches::Only(ids)
    }

    /// Recipes passing every tag category and the current query.
    pub fn current_visible_ids(&self) -> Vec<RecipeId> {
        let factors = [
            self.filter_by_category(TagCategory::Ingredients),
            self.filter_by_category(TagCategory::Appliances),
            self.filter_by_category(TagCategory::Ustensils),
            self.search_free_text(&self.query),
        ];
        intersect_all(&factors, self.catalog.ids())
    }

    /// Tag values of `category` still worth offering for `visible_ids`.
    ///
    /// When every recipe is visible this is the head of the category's
    /// vocabulary. Otherwise tokens are gathered from the visible recipes in
    /// first-seen order. Selected tags are never offered, and at most
    /// `option_limit` entries are returned.
    pub fn remaining_options(
        &self,
        category: TagCategory,
        visible_ids: &[RecipeId],
    ) -> Vec<String> {
        self.available_tokens(category, visible_ids)
            .into_iter()
            .take(self.config.option_limit)
            .collect()
    }

    fn available_tokens(&self, category: TagCategory, visible_ids: &[RecipeId]) -> Vec<String> {
        let not_selected = |token: &String| !self.selected.contains(category, token);

        if self.covers_catalog(visible_ids) {
            return self
                .index
                .vocabulary(category.category())
                .iter()
                .filter(|token| not_selected(*token))
                .cloned()
                .collect();
        }

        let mut seen = AHashSet::new();
        visible_ids
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .flat_map(|recipe| category.category().tokens(recipe))
            .filter(|token| not_selected(token) && seen.insert(token.clone()))
            .collect()
    }

    /// Whether `ids` holds every catalog recipe exactly once.
    fn covers_catalog(&self, ids: &[RecipeId]) -> bool {
        if ids.len() != self.catalog.len() {
            return false;
        }
        let mut seen = AHashSet::with_capacity(ids.len());
        ids.iter().all(|&id| self.catalog.contains(id) && seen.insert(id))
    }

    /// The visible recipes and every category's remaining options.
    pub fn view(&self) -> FilterView {
        let visible_ids = self.current_visible_ids();
        FilterView {
            ingredients: self.remaining_options(TagCategory::Ingredients, &visible_ids),
            appliances: self.remaining_options(TagCategory::Appliances, &visible_ids),
            ustensils: self.remaining_options(TagCategory::Ustensils, &visible_ids),
            visible_ids,
        }
    }

    /// Selects a tag and recomputes the view. Already selected tags are a no-op.
    pub fn select_tag(&mut self, category: TagCategory, token: &str) -> FilterView {
        let token = crate::search::normalize(token);
        if self.index.postings(category.category(), &token).is_none() {
            tracing::warn!("Selected {} tag '{}' matches no recipe", category, token);
        }
        if self.selected.insert(category, token.clone()) {
            tracing::debug!("Selected {} tag '{}'", category, token);
        }
        self.view()
    }

    /// Deselects a tag and recomputes the view. Unselected tags are a no-op.
    pub fn deselect_tag(&mut self, category: TagCategory, token: &str) -> FilterView {
        let token = crate::search::normalize(token);
        if self.selected.remove(category, &token) {
            tracing::debug!("Deselected {} tag '{}'", category, token);
        }
        self.view()
    }

    /// Drops every selected tag and recomputes the view.
    pub fn clear_tags(&mut self) -> FilterView {
        self.selected.clear();
        self.view()
    }

    /// Replaces the free-text query and recomputes the view.
    pub fn set_query(&mut self, query: &str) -> FilterView {
        query.clone_into(&mut self.query);
        let view = self.view();
        tracing::debug!(
            "Query '{}' leaves {} visible recipes",
            self.query,
            view.visible_ids.len()
        );
        view
    }

    /// Dropdown autocomplete for a tag category.
    ///
    /// Short input lists the remaining options. Longer input lists tag values
    /// completing it that occur in the visible recipes and are not selected.
    pub fn suggest_tags(&self, category: TagCategory, input: &str) -> Vec<String> {
        let visible_ids = self.current_visible_ids();
        let input = input.trim();
        if input.chars().count() < self.config.min_tag_input_len {
            return self.remaining_options(category, &visible_ids);
        }

        let available: AHashSet<String> = self
            .available_tokens(category, &visible_ids)
            .into_iter()
            .collect();
        let mut seen = AHashSet::new();
        self.index
            .complete(category.category(), input)
            .into_iter()
            .filter(|token| available.contains(token) && seen.insert(token.clone()))
            .take(self.config.option_limit)
            .collect()
    }

    /// Search-bar autocomplete over recipe names.
    pub fn suggest_recipes(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        if query.chars().count() < self.config.min_query_len {
            return Vec::new();
        }
        self.index
            .complete_names(query)
            .into_iter()
            .take(self.config.suggestion_limit)
            .collect()
    }
}
