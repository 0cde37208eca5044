use rusqlite::Connection;
use todolist_core::db::open_db_in_memory;
use todolist_core::{DefaultItems, Item, ItemRepository, RepoError, SqliteItemRepository};
use uuid::Uuid;

#[test]
fn list_items_is_empty_on_fresh_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    assert!(repo.list_items().unwrap().is_empty());
    assert_eq!(repo.count_items().unwrap(), 0);
}

#[test]
fn insert_items_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let defaults = DefaultItems::default().instantiate();

    repo.insert_items(&defaults).unwrap();

    let listed = repo.list_items().unwrap();
    assert_eq!(listed, defaults);
}

#[test]
fn insert_items_is_all_or_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let first = Item::new("first");
    let duplicate_id = Item::with_id(first.id, "same id again");

    let err = repo.insert_items(&[first, duplicate_id]).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(repo.count_items().unwrap(), 0);
}

#[test]
fn create_item_rejects_empty_name_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let err = repo.create_item(&Item::new("")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.count_items().unwrap(), 0);
}

#[test]
fn create_then_delete_item() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let milk = Item::new("Milk");
    let bread = Item::new("Bread");

    assert_eq!(repo.create_item(&milk).unwrap(), milk.id);
    repo.create_item(&bread).unwrap();
    repo.delete_item(milk.id).unwrap();

    assert_eq!(repo.list_items().unwrap(), vec![bread]);
}

#[test]
fn delete_missing_item_returns_not_found_and_keeps_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    repo.create_item(&Item::new("Milk")).unwrap();

    let missing = Uuid::new_v4();
    let err = repo.delete_item(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
    assert_eq!(repo.count_items().unwrap(), 1);
}

#[test]
fn try_new_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteItemRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("items")));
}
