//! List registry: named lists and their embedded item copies.
//!
//! # Responsibility
//! - Find, create, append to, and remove from named lists.
//! - Keep each list write atomic (list row plus item rows).
//!
//! # Invariants
//! - List names are unique; the UNIQUE constraint is the race guard for
//!   concurrent creation.
//! - Callers pass already-normalized names.
//! - Item rows of a list are returned in insertion order.

use crate::model::item::{Item, ItemId};
use crate::model::list::TodoList;
use crate::repo::item_repo::{RepoError, RepoResult};
use crate::repo::{ensure_tables, parse_item_id};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Transaction, TransactionBehavior};

/// Repository interface for named lists.
pub trait ListRepository {
    /// Returns the list stored under `name`, if any.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<TodoList>>;
    /// Creates a list holding `items`; `Conflict` when the name is taken.
    fn create_with_items(&self, name: &str, items: &[Item]) -> RepoResult<TodoList>;
    /// Appends one item; `ListNotFound` when the list is absent.
    fn append_item(&self, list_name: &str, item: &Item) -> RepoResult<TodoList>;
    /// Removes the item with `item_id`; absent ids are a no-op.
    fn remove_item(&self, list_name: &str, item_id: ItemId) -> RepoResult<TodoList>;
    /// Returns all list names sorted alphabetically.
    fn list_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed list registry.
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["lists", "list_items"])?;
        Ok(Self { conn })
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn find_by_name(&self, name: &str) -> RepoResult<Option<TodoList>> {
        match find_list_id(self.conn, name)? {
            Some(list_id) => Ok(Some(load_list(self.conn, list_id, name)?)),
            None => Ok(None),
        }
    }

    fn create_with_items(&self, name: &str, items: &[Item]) -> RepoResult<TodoList> {
        for item in items {
            item.validate()?;
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let inserted = tx.execute("INSERT INTO lists (name) VALUES (?1);", [name]);
        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                return Err(RepoError::Conflict(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        }
        let list_id = tx.last_insert_rowid();

        for item in items {
            insert_list_item(&tx, list_id, item)?;
        }
        tx.commit()?;

        Ok(TodoList {
            name: name.to_string(),
            items: items.to_vec(),
        })
    }

    fn append_item(&self, list_name: &str, item: &Item) -> RepoResult<TodoList> {
        item.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let list_id = find_list_id(&tx, list_name)?
            .ok_or_else(|| RepoError::ListNotFound(list_name.to_string()))?;
        insert_list_item(&tx, list_id, item)?;
        let list = load_list(&tx, list_id, list_name)?;
        tx.commit()?;
        Ok(list)
    }

    fn remove_item(&self, list_name: &str, item_id: ItemId) -> RepoResult<TodoList> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let list_id = find_list_id(&tx, list_name)?
            .ok_or_else(|| RepoError::ListNotFound(list_name.to_string()))?;
        tx.execute(
            "DELETE FROM list_items WHERE list_id = ?1 AND uuid = ?2;",
            params![list_id, item_id.to_string()],
        )?;
        let list = load_list(&tx, list_id, list_name)?;
        tx.commit()?;
        Ok(list)
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM lists ORDER BY name ASC;")?;
        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get(0)?);
        }
        Ok(names)
    }
}

fn find_list_id(conn: &Connection, name: &str) -> RepoResult<Option<i64>> {
    let list_id = conn
        .query_row("SELECT id FROM lists WHERE name = ?1;", [name], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(list_id)
}

fn insert_list_item(conn: &Connection, list_id: i64, item: &Item) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO list_items (uuid, list_id, name) VALUES (?1, ?2, ?3);",
        params![item.id.to_string(), list_id, item.name.as_str()],
    )?;
    Ok(())
}

fn load_list(conn: &Connection, list_id: i64, name: &str) -> RepoResult<TodoList> {
    let mut stmt = conn.prepare(
        "SELECT uuid, name
         FROM list_items
         WHERE list_id = ?1
         ORDER BY seq ASC;",
    )?;
    let mut rows = stmt.query([list_id])?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        let uuid_text: String = row.get("uuid")?;
        items.push(Item::with_id(
            parse_item_id(&uuid_text, "list_items.uuid")?,
            row.get::<_, String>("name")?,
        ));
    }

    Ok(TodoList {
        name: name.to_string(),
        items,
    })
}
