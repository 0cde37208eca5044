//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define the item store and list registry contracts.
//! - Isolate SQLite query details from the request-handling use cases.
//!
//! # Invariants
//! - Repository writes call `Item::validate()` before persistence.
//! - Multi-row writes run inside one transaction.
//! - Repository APIs return semantic errors (`NotFound`, `ListNotFound`,
//!   `Conflict`) in addition to DB transport errors.

pub mod item_repo;
pub mod list_repo;

use crate::repo::item_repo::{RepoError, RepoResult};
use rusqlite::Connection;

pub(crate) fn ensure_tables(conn: &Connection, tables: &[&'static str]) -> RepoResult<()> {
    for &table in tables {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }
    Ok(())
}

pub(crate) fn parse_item_id(value: &str, column: &str) -> RepoResult<uuid::Uuid> {
    uuid::Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}
