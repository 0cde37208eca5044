//! Core domain logic for the todolist server.
//! This crate owns the item/list model, persistence and page use cases.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::defaults::DefaultItems;
pub use model::item::{Item, ItemId, ItemValidationError};
pub use model::list::{normalize_list_name, TodoList};
pub use repo::item_repo::{ItemRepository, RepoError, RepoResult, SqliteItemRepository};
pub use repo::list_repo::{ListRepository, SqliteListRepository};
pub use service::target::{ListTarget, FAVICON_SEGMENT, TODAY};
pub use service::todo_service::{
    ListPage, PageOutcome, ServiceResult, TodoService, TodoServiceError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
