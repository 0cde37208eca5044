//! Named list model and name normalization.
//!
//! # Invariants
//! - `TodoList::name` is always the output of `normalize_list_name`.
//! - `items` keeps insertion order.

use crate::model::item::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// A named collection of embedded item copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub name: String,
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// Capitalizes the first character and lowercases the rest.
///
/// `"groceries"`, `"GROCERIES"` and `"gRoCeRiEs"` all map to `"Groceries"`.
/// Only the first output character is uppercase, even when the first input
/// character expands (`"ßuppe"` maps to `"Ssuppe"`), so the result is a
/// fixed point.
pub fn normalize_list_name(raw: &str) -> String {
    let mut chars = raw.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut normalized = String::with_capacity(raw.len());
    normalized.extend(upper.next());
    normalized.extend(upper.flat_map(char::to_lowercase));
    normalized.push_str(&chars.as_str().to_lowercase());
    normalized
}
