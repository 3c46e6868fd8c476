//! Indexing and prefix completion over the recipe catalog.
//!
//! This module provides tokenization, per-field inverted indexes and the
//! completion tries used for autocomplete and free-text matching.

pub(crate) mod index;
pub(crate) mod tokenize;
pub(crate) mod trie;

pub use index::{Category, FieldIndex, InvertedIndex, SearchIndex, TagCategory};
pub use tokenize::{normalize, split_words};
pub use trie::Trie;
