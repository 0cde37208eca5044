//! HTML views.

use askama::Template;
use todolist_core::{Item, ListPage, ListTarget};

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub title: String,
    pub items: Vec<Item>,
    pub lists: Vec<String>,
}

impl ListTemplate {
    pub fn new(page: ListPage, lists: Vec<String>) -> Self {
        Self {
            title: page.title,
            items: page.items,
            lists,
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Canonical URL of a list; named segments are percent-encoded.
pub fn target_path(target: &ListTarget) -> String {
    match target {
        ListTarget::Today => "/".to_string(),
        ListTarget::Named(name) => format!("/{}", urlencoding::encode(name)),
    }
}
