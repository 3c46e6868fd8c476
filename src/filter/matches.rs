//! Ordered id sets and the "unconstrained" sentinel.

use crate::catalog::RecipeId;
use ahash::AHashSet;

/// Set of recipe ids that remembers insertion order.
///
/// Membership tests go through a hash set; iteration follows the order in
/// which ids were first inserted.
#[derive(Debug, Clone, Default)]
pub struct IdSet {
    order: Vec<RecipeId>,
    members: AHashSet<RecipeId>,
}

impl IdSet {
    /// Inserts `id`, returning `false` if it was already present.
    pub fn insert(&mut self, id: RecipeId) -> bool {
        let inserted = self.members.insert(id);
        if inserted {
            self.order.push(id);
        }
        inserted
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[RecipeId] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<RecipeId> {
        self.order
    }

    /// Adds every id of `other` not already present, after the existing ones.
    pub fn union_with(&mut self, other: &Self) {
        for id in other.iter() {
            self.insert(id);
        }
    }

    /// Ids of `self` that are also in `other`, in `self`'s order.
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter().filter(|&id| other.contains(id)).collect()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|id| other.contains(id))
    }

    /// Same members, regardless of order.
    pub fn same_members(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl FromIterator<RecipeId> for IdSet {
    fn from_iter<I: IntoIterator<Item = RecipeId>>(iter: I) -> Self {
        let mut set = Self::default();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Result of a single filter factor.
#[derive(Debug, Clone)]
pub enum Matches {
    /// No restriction: every recipe of the catalog matches.
    All,
    /// Exactly these recipes match. May be empty.
    Only(IdSet),
}

impl Matches {
    pub const fn is_unconstrained(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Concrete id set, expanding `All` to `all_ids`.
    pub fn resolve(&self, all_ids: &[RecipeId]) -> IdSet {
        match self {
            Self::All => all_ids.iter().copied().collect(),
            Self::Only(ids) => ids.clone(),
        }
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.contains(id),
        }
    }
}

/// Intersects filter factors left to right.
///
/// The first factor provides the order (`All` meaning `all_ids` order); each
/// later factor only drops ids. `All` factors after the first never drop
/// anything.
pub fn intersect_all(factors: &[Matches], all_ids: &[RecipeId]) -> Vec<RecipeId> {
    let Some((first, rest)) = factors.split_first() else {
        return all_ids.to_vec();
    };

    let constraints: Vec<&IdSet> = rest
        .iter()
        .filter_map(|factor| match factor {
            Matches::All => None,
            Matches::Only(ids) => Some(ids),
        })
        .collect();

    let keep = |id: &RecipeId| constraints.iter().all(|ids| ids.contains(*id));
    match first {
        Matches::All => all_ids.iter().copied().filter(keep).collect(),
        Matches::Only(ids) => ids.as_slice().iter().copied().filter(keep).collect(),
    }
}

/// Intersects posting sets left to right, starting from the first set's order.
///
/// Returns `None` when `sets` is empty.
pub fn intersection<'a>(sets: impl IntoIterator<Item = &'a IdSet>) -> Option<IdSet> {
    let mut sets = sets.into_iter();
    let mut shared = sets.next()?.clone();
    for set in sets {
        shared = shared.intersection(set);
    }
    Some(shared)
}
