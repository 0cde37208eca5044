//! To-do request use cases.
//!
//! # Responsibility
//! - Implement the five page operations: view Today, view/create a named
//!   list, add an item, delete an item, about.
//! - Seed Today and new lists from the default item template.
//!
//! # Invariants
//! - Each operation performs one read-then-branch or one mutation.
//! - Today seeding completes before the redirect outcome is returned, so the
//!   follow-up request always observes the seeded items.
//! - Deleting an id that is not present is a logged no-op, never an error.
//! - Redirects always target the normalized list name.

use crate::model::defaults::DefaultItems;
use crate::model::item::{Item, ItemValidationError};
use crate::model::list::TodoList;
use crate::repo::item_repo::{ItemRepository, RepoError};
use crate::repo::list_repo::ListRepository;
use crate::service::target::{ListTarget, FAVICON_SEGMENT};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for page use cases.
#[derive(Debug)]
pub enum TodoServiceError {
    /// A required form field is missing or blank.
    Validation(String),
    /// Target named list does not exist.
    ListNotFound(String),
    /// A list with this name already exists.
    Conflict(String),
    /// Persistence-layer failure, including an item id the store rejected.
    Store(RepoError),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::ListNotFound(name) => write!(f, "list not found: `{name}`"),
            Self::Conflict(name) => write!(f, "list already exists: `{name}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TodoServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err.to_string()),
            RepoError::ListNotFound(name) => Self::ListNotFound(name),
            RepoError::Conflict(name) => Self::Conflict(name),
            other => Self::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, TodoServiceError>;

/// Data needed to render one list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub title: String,
    pub items: Vec<Item>,
}

impl From<TodoList> for ListPage {
    fn from(value: TodoList) -> Self {
        Self {
            title: value.name,
            items: value.items,
        }
    }
}

/// What the HTTP layer should do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Render the list page.
    Render(ListPage),
    /// Redirect the client to the canonical URL of a list.
    Redirect(ListTarget),
    /// Send no body at all.
    Ignored,
}

/// To-do service facade over the item store and list registry.
pub struct TodoService<I: ItemRepository, L: ListRepository> {
    items: I,
    lists: L,
    defaults: DefaultItems,
}

impl<I: ItemRepository, L: ListRepository> TodoService<I, L> {
    /// Creates a service seeding from the built-in default items.
    pub fn new(items: I, lists: L) -> Self {
        Self::with_defaults(items, lists, DefaultItems::default())
    }

    /// Creates a service seeding from a custom template.
    pub fn with_defaults(items: I, lists: L, defaults: DefaultItems) -> Self {
        Self {
            items,
            lists,
            defaults,
        }
    }

    /// `GET /`: renders Today, seeding it first when empty.
    pub fn view_today(&self) -> ServiceResult<PageOutcome> {
        let items = self.items.list_items()?;
        if items.is_empty() {
            let seeded = self.defaults.instantiate();
            self.items.insert_items(&seeded)?;
            info!(
                "event=today_seed module=service status=ok items={}",
                seeded.len()
            );
            return Ok(PageOutcome::Redirect(ListTarget::Today));
        }

        Ok(PageOutcome::Render(ListPage {
            title: ListTarget::Today.title().to_string(),
            items,
        }))
    }

    /// `GET /:name`: renders a named list, creating it on first visit.
    pub fn view_list(&self, segment: &str) -> ServiceResult<PageOutcome> {
        if segment == FAVICON_SEGMENT {
            return Ok(PageOutcome::Ignored);
        }

        let name = match ListTarget::resolve(segment) {
            ListTarget::Today => return Ok(PageOutcome::Redirect(ListTarget::Today)),
            ListTarget::Named(name) => name,
        };

        if let Some(list) = self.lists.find_by_name(&name)? {
            return Ok(PageOutcome::Render(list.into()));
        }

        let created = match self
            .lists
            .create_with_items(&name, &self.defaults.instantiate())
        {
            Ok(list) => list,
            // Another writer created it between lookup and insert.
            Err(RepoError::Conflict(_)) => {
                warn!("event=list_create module=service status=noop list={name} reason=conflict");
                return Ok(PageOutcome::Redirect(ListTarget::Named(name)));
            }
            Err(err) => return Err(err.into()),
        };
        info!(
            "event=list_create module=service status=ok list={} items={}",
            created.name,
            created.items.len()
        );
        Ok(PageOutcome::Redirect(ListTarget::Named(created.name)))
    }

    /// `POST /`: adds one item to Today or a named list.
    pub fn add_item(&self, new_item: &str, list: &str) -> ServiceResult<PageOutcome> {
        let item = Item::new(new_item);
        item.validate().map_err(validation_error)?;

        let target = ListTarget::resolve(list);
        match &target {
            ListTarget::Today => {
                self.items.create_item(&item)?;
            }
            ListTarget::Named(name) => {
                self.lists.append_item(name, &item)?;
            }
        }
        info!(
            "event=item_add module=service status=ok list={} item_id={}",
            target.title(),
            item.id
        );
        Ok(PageOutcome::Redirect(target))
    }

    /// `POST /delete`: removes one item; absent ids are a no-op.
    pub fn delete_item(&self, checkbox: &str, list_name: &str) -> ServiceResult<PageOutcome> {
        let raw_id = checkbox.trim();
        if raw_id.is_empty() {
            return Err(TodoServiceError::Validation(
                "item id is required".to_string(),
            ));
        }

        let target = ListTarget::resolve(list_name);
        let Ok(item_id) = Uuid::parse_str(raw_id) else {
            warn!(
                "event=item_delete module=service status=noop list={} reason=invalid_id",
                target.title()
            );
            return Ok(PageOutcome::Redirect(target));
        };

        match &target {
            ListTarget::Today => match self.items.delete_item(item_id) {
                Ok(()) => {}
                Err(RepoError::NotFound(_)) => {
                    warn!(
                        "event=item_delete module=service status=noop list={} item_id={} reason=not_found",
                        target.title(),
                        item_id
                    );
                    return Ok(PageOutcome::Redirect(ListTarget::Today));
                }
                Err(err) => return Err(err.into()),
            },
            ListTarget::Named(name) => {
                self.lists.remove_item(name, item_id)?;
            }
        }
        info!(
            "event=item_delete module=service status=ok list={} item_id={}",
            target.title(),
            item_id
        );
        Ok(PageOutcome::Redirect(target))
    }

    /// Names of all registry lists, for navigation.
    pub fn list_names(&self) -> ServiceResult<Vec<String>> {
        Ok(self.lists.list_names()?)
    }
}

fn validation_error(err: ItemValidationError) -> TodoServiceError {
    TodoServiceError::Validation(err.to_string())
}
