//! Domain model for checklist items and named lists.
//!
//! # Responsibility
//! - Define the canonical item and list shapes used by the stores and the
//!   request handlers.
//! - Hold the immutable default-item template.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId` that is never shared by
//!   two collections.
//! - A list name is stored in normalized (capitalized) form.

pub mod defaults;
pub mod item;
pub mod list;
