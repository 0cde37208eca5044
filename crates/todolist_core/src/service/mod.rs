//! Request-handling use cases.
//!
//! # Responsibility
//! - Resolve the target collection of a request once (`ListTarget`).
//! - Orchestrate item store and list registry calls into page outcomes.
//! - Keep the HTTP layer free of storage and seeding decisions.

pub mod target;
pub mod todo_service;
