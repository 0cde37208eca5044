use rusqlite::Connection;
use todolist_core::db::open_db_in_memory;
use todolist_core::{
    DefaultItems, ItemRepository, ListPage, ListRepository, ListTarget, PageOutcome,
    SqliteItemRepository, SqliteListRepository, TodoService, TodoServiceError,
};

type SqliteTodoService<'conn> =
    TodoService<SqliteItemRepository<'conn>, SqliteListRepository<'conn>>;

fn service(conn: &Connection) -> SqliteTodoService<'_> {
    TodoService::new(
        SqliteItemRepository::try_new(conn).unwrap(),
        SqliteListRepository::try_new(conn).unwrap(),
    )
}

fn rendered(outcome: PageOutcome) -> ListPage {
    match outcome {
        PageOutcome::Render(page) => page,
        other => panic!("expected render, got {other:?}"),
    }
}

fn named(name: &str) -> PageOutcome {
    PageOutcome::Redirect(ListTarget::Named(name.to_string()))
}

#[test]
fn first_visit_to_today_seeds_defaults_once_then_renders_them() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(
        service.view_today().unwrap(),
        PageOutcome::Redirect(ListTarget::Today)
    );

    let page = rendered(service.view_today().unwrap());
    assert_eq!(page.title, "Today");
    let names: Vec<_> = page.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, DefaultItems::default().names());

    rendered(service.view_today().unwrap());
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    assert_eq!(items.count_items().unwrap(), 3);
}

#[test]
fn first_visit_to_named_list_creates_it_and_redirects_to_normalized_name() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    service.view_today().unwrap();

    assert_eq!(service.view_list("groceries").unwrap(), named("Groceries"));

    let lists = SqliteListRepository::try_new(&conn).unwrap();
    let groceries = lists.find_by_name("Groceries").unwrap().unwrap();
    assert_eq!(groceries.items.len(), 3);

    let today = SqliteItemRepository::try_new(&conn)
        .unwrap()
        .list_items()
        .unwrap();
    for item in &groceries.items {
        assert!(today.iter().all(|today_item| today_item.id != item.id));
    }

    let page = rendered(service.view_list("groceries").unwrap());
    assert_eq!(page.title, "Groceries");
    assert_eq!(page.items, groceries.items);
}

#[test]
fn names_differing_in_case_resolve_to_the_same_list() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    service.view_list("GROCERIES").unwrap();
    let lower = rendered(service.view_list("groceries").unwrap());
    let mixed = rendered(service.view_list("gRoCeRiEs").unwrap());

    assert_eq!(lower, mixed);
    assert_eq!(service.list_names().unwrap(), vec!["Groceries".to_string()]);
}

#[test]
fn following_the_creation_redirect_renders_the_same_list() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    for segment in ["ßuppe", "groceries", "\u{01C6}ungla"] {
        let target = match service.view_list(segment).unwrap() {
            PageOutcome::Redirect(ListTarget::Named(name)) => name,
            other => panic!("expected redirect to a named list, got {other:?}"),
        };
        let page = rendered(service.view_list(&target).unwrap());
        assert_eq!(page.title, target);
    }

    assert_eq!(
        service.list_names().unwrap(),
        vec![
            "Groceries".to_string(),
            "Ssuppe".to_string(),
            "\u{01C4}ungla".to_string()
        ]
    );
}

#[test]
fn visiting_today_by_name_redirects_to_root_without_creating_a_list() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(
        service.view_list("today").unwrap(),
        PageOutcome::Redirect(ListTarget::Today)
    );
    assert!(service.list_names().unwrap().is_empty());
}

#[test]
fn add_item_to_named_list_leaves_other_collections_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    service.view_today().unwrap();
    service.view_list("groceries").unwrap();
    service.view_list("work").unwrap();

    assert_eq!(
        service.add_item("Milk", "Groceries").unwrap(),
        named("Groceries")
    );

    let lists = SqliteListRepository::try_new(&conn).unwrap();
    let groceries = lists.find_by_name("Groceries").unwrap().unwrap();
    assert_eq!(groceries.items.len(), 4);
    assert_eq!(groceries.items[3].name, "Milk");
    assert_eq!(lists.find_by_name("Work").unwrap().unwrap().items.len(), 3);
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    assert_eq!(items.count_items().unwrap(), 3);
}

#[test]
fn add_item_to_today_redirects_to_root() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(
        service.add_item("Milk", "Today").unwrap(),
        PageOutcome::Redirect(ListTarget::Today)
    );
    let page = rendered(service.view_today().unwrap());
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Milk");
}

#[test]
fn add_empty_item_is_rejected_and_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.add_item("", "Today").unwrap_err();
    assert!(matches!(err, TodoServiceError::Validation(_)));
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    assert_eq!(items.count_items().unwrap(), 0);
}

#[test]
fn add_item_to_unknown_list_propagates_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.add_item("Milk", "Nowhere").unwrap_err();
    assert!(matches!(err, TodoServiceError::ListNotFound(name) if name == "Nowhere"));
}

#[test]
fn delete_from_named_list_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    service.view_list("groceries").unwrap();
    service.add_item("Milk", "Groceries").unwrap();

    let lists = SqliteListRepository::try_new(&conn).unwrap();
    let milk_id = lists.find_by_name("Groceries").unwrap().unwrap().items[3].id;

    assert_eq!(
        service
            .delete_item(&milk_id.to_string(), "Groceries")
            .unwrap(),
        named("Groceries")
    );
    let after_first = lists.find_by_name("Groceries").unwrap().unwrap();
    assert_eq!(after_first.items.len(), 3);
    assert!(!after_first.contains(milk_id));

    assert_eq!(
        service
            .delete_item(&milk_id.to_string(), "Groceries")
            .unwrap(),
        named("Groceries")
    );
    assert_eq!(lists.find_by_name("Groceries").unwrap().unwrap(), after_first);
}

#[test]
fn delete_from_today_tolerates_missing_and_malformed_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    service.view_today().unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();
    let first_id = items.list_items().unwrap()[0].id;

    let today = PageOutcome::Redirect(ListTarget::Today);
    assert_eq!(
        service.delete_item(&first_id.to_string(), "Today").unwrap(),
        today
    );
    assert_eq!(items.count_items().unwrap(), 2);

    assert_eq!(
        service.delete_item(&first_id.to_string(), "Today").unwrap(),
        today
    );
    assert_eq!(service.delete_item("not-a-uuid", "Today").unwrap(), today);
    assert_eq!(items.count_items().unwrap(), 2);
}

#[test]
fn delete_without_item_id_is_a_validation_error() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.delete_item("  ", "Today").unwrap_err();
    assert!(matches!(err, TodoServiceError::Validation(_)));
}

#[test]
fn delete_from_unknown_list_propagates_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service
        .delete_item(&uuid::Uuid::new_v4().to_string(), "Nowhere")
        .unwrap_err();
    assert!(matches!(err, TodoServiceError::ListNotFound(_)));
}
