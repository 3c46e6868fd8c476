//! Tags currently selected by the user, per category.

use crate::search::TagCategory;

/// Selected tag tokens, one insertion-ordered set per tag category.
///
/// Starts empty. Tags leave only through [`SelectedFilters::remove`] or
/// [`SelectedFilters::clear`].
#[derive(Debug, Clone, Default)]
pub struct SelectedFilters {
    ingredients: Vec<String>,
    appliances: Vec<String>,
    ustensils: Vec<String>,
}

impl SelectedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected tokens of `category`, in selection order.
    pub fn tokens(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Ingredients => &self.ingredients,
            TagCategory::Appliances => &self.appliances,
            TagCategory::Ustensils => &self.ustensils,
        }
    }

    fn tokens_mut(&mut self, category: TagCategory) -> &mut Vec<String> {
        match category {
            TagCategory::Ingredients => &mut self.ingredients,
            TagCategory::Appliances => &mut self.appliances,
            TagCategory::Ustensils => &mut self.ustensils,
        }
    }

    pub fn contains(&self, category: TagCategory, token: &str) -> bool {
        self.tokens(category).iter().any(|selected| selected == token)
    }

    /// Adds `token`; returns `false` if it was already selected.
    pub fn insert(&mut self, category: TagCategory, token: String) -> bool {
        if self.contains(category, &token) {
            return false;
        }
        self.tokens_mut(category).push(token);
        true
    }

    /// Removes `token`; returns `false` if it was not selected.
    pub fn remove(&mut self, category: TagCategory, token: &str) -> bool {
        let tokens = self.tokens_mut(category);
        match tokens.iter().position(|selected| selected == token) {
            Some(position) => {
                tokens.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        TagCategory::ALL
            .iter()
            .all(|&category| self.tokens(category).is_empty())
    }

    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.appliances.clear();
        self.ustensils.clear();
    }
}
