//! Checklist item model.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `name` is never empty or whitespace-only once persisted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a checklist item.
pub type ItemId = Uuid;

/// One checkbox entry, either in the Today store or embedded in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

/// Validation failure for item writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Item name is empty after trimming.
    EmptyName,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name is required"),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates an item with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used when rehydrating rows from storage.
    pub fn with_id(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Checks write invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemValidationError};

    #[test]
    fn validate_rejects_blank_names() {
        assert_eq!(Item::new("").validate(), Err(ItemValidationError::EmptyName));
        assert_eq!(
            Item::new("  \t").validate(),
            Err(ItemValidationError::EmptyName)
        );
        assert!(Item::new("Milk").validate().is_ok());
    }

    #[test]
    fn serializes_id_and_name_fields() {
        let item = Item::new("Milk");
        let value = serde_json::to_value(&item).expect("item should serialize");
        assert_eq!(value["name"], "Milk");
        assert_eq!(value["id"], item.id.to_string());
    }
}
