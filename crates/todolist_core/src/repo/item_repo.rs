//! Item store: the Today items, persisted in the `items` table.
//!
//! # Responsibility
//! - Provide create/list/delete APIs for items owned directly by the store.
//! - Bulk-insert seed items atomically.
//!
//! # Invariants
//! - `list_items` returns rows in insertion order.
//! - `insert_items` is all-or-nothing.
//! - A failed delete leaves the table untouched.

use crate::db::DbError;
use crate::model::item::{Item, ItemId, ItemValidationError};
use crate::repo::{ensure_tables, parse_item_id};
use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by the item store and the list registry.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Db(DbError),
    NotFound(ItemId),
    ListNotFound(String),
    Conflict(String),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::ListNotFound(name) => write!(f, "list not found: `{name}`"),
            Self::Conflict(name) => write!(f, "list already exists: `{name}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is not migrated: missing table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the Today item store.
pub trait ItemRepository {
    /// Returns all items in insertion order.
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    /// Returns the number of stored items.
    fn count_items(&self) -> RepoResult<u64>;
    /// Inserts a batch of items in one transaction.
    fn insert_items(&self, items: &[Item]) -> RepoResult<()>;
    /// Persists one item and returns its id.
    fn create_item(&self, item: &Item) -> RepoResult<ItemId>;
    /// Deletes one item; `NotFound` when no row has that id.
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item store.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["items"])?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn list_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, name FROM items ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("uuid")?;
            items.push(Item::with_id(
                parse_item_id(&uuid_text, "items.uuid")?,
                row.get::<_, String>("name")?,
            ));
        }
        Ok(items)
    }

    fn count_items(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative item count `{count}`")))
    }

    fn insert_items(&self, items: &[Item]) -> RepoResult<()> {
        for item in items {
            item.validate()?;
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        for item in items {
            tx.execute(
                "INSERT INTO items (uuid, name) VALUES (?1, ?2);",
                params![item.id.to_string(), item.name.as_str()],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn create_item(&self, item: &Item) -> RepoResult<ItemId> {
        item.validate()?;
        self.conn.execute(
            "INSERT INTO items (uuid, name) VALUES (?1, ?2);",
            params![item.id.to_string(), item.name.as_str()],
        )?;
        Ok(item.id)
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}
