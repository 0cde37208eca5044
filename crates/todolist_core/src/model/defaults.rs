//! Default item template used for seeding.
//!
//! # Invariants
//! - The template only stores names; ids are minted per use by
//!   `DefaultItems::instantiate`, so two seeded collections never share an
//!   item identity.

use crate::model::item::Item;

const DEFAULT_ITEM_NAMES: [&str; 3] = [
    "Welcome to your todolist!",
    "Hit + button to add a new item.",
    "<-- Hit this to delete an item.",
];

/// Immutable, ordered template of seed item names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultItems {
    names: Vec<String>,
}

impl Default for DefaultItems {
    fn default() -> Self {
        Self::from_names(DEFAULT_ITEM_NAMES)
    }
}

impl DefaultItems {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Builds a new set of items with fresh ids, in template order.
    pub fn instantiate(&self) -> Vec<Item> {
        self.names.iter().map(|name| Item::new(name.as_str())).collect()
    }
}
