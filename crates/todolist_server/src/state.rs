//! Shared application state.
//!
//! # Invariants
//! - The connection lock is only taken inside `with_service`, on a
//!   `spawn_blocking` thread; async workers never run SQLite.
//! - Repositories are rebuilt per request, so nothing is cached between
//!   requests.

use crate::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use todolist_core::{
    DefaultItems, ServiceResult, SqliteItemRepository, SqliteListRepository, TodoService,
    TodoServiceError,
};

/// Service type bound to one locked connection.
pub type SqliteTodoService<'conn> =
    TodoService<SqliteItemRepository<'conn>, SqliteListRepository<'conn>>;

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
    defaults: DefaultItems,
}

impl AppState {
    /// Wraps a migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self::with_defaults(conn, DefaultItems::default())
    }

    pub fn with_defaults(conn: Connection, defaults: DefaultItems) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            defaults,
        }
    }

    /// Runs one use case against the store on the blocking thread pool.
    ///
    /// The lock and every SQLite call stay off the async workers.
    pub async fn with_service<T, F>(&self, operation: F) -> Result<T, ApiError>
    where
        F: for<'conn> FnOnce(&SqliteTodoService<'conn>) -> ServiceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.conn);
        let defaults = self.defaults.clone();

        tokio::task::spawn_blocking(move || -> Result<T, ApiError> {
            let conn = store
                .lock()
                .map_err(|_| ApiError::internal("store_lock_poisoned", "store is unavailable"))?;
            let service = build_service(&conn, defaults)?;
            Ok(operation(&service)?)
        })
        .await
        .map_err(|err| ApiError::internal("store_task_failed", err.to_string()))?
    }
}

fn build_service(
    conn: &Connection,
    defaults: DefaultItems,
) -> Result<SqliteTodoService<'_>, TodoServiceError> {
    Ok(TodoService::with_defaults(
        SqliteItemRepository::try_new(conn)?,
        SqliteListRepository::try_new(conn)?,
        defaults,
    ))
}
