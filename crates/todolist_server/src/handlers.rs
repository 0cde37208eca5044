//! Route handlers.
//!
//! Each handler resolves its page outcome through `AppState::with_service`
//! and then renders, redirects, or answers with an empty body.

use crate::error::ApiError;
use crate::state::{AppState, SqliteTodoService};
use crate::views::{target_path, AboutTemplate, ListTemplate};
use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use todolist_core::{PageOutcome, ServiceResult, FAVICON_SEGMENT};

/// Form posted by the "+" button.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(rename = "newItem", default)]
    pub new_item: String,
    #[serde(default)]
    pub list: String,
}

/// Form posted by ticking an item checkbox.
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    #[serde(default)]
    pub checkbox: String,
    #[serde(rename = "listName", default)]
    pub list_name: String,
}

/// A page outcome plus the list names shown in navigation.
struct Page {
    outcome: PageOutcome,
    lists: Vec<String>,
}

pub async fn view_today(State(state): State<AppState>) -> Result<Response, ApiError> {
    let page = state
        .with_service(|service| with_navigation(service, service.view_today()?))
        .await?;
    respond(page)
}

pub async fn view_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    if name == FAVICON_SEGMENT {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let page = state
        .with_service(move |service| with_navigation(service, service.view_list(&name)?))
        .await?;
    respond(page)
}

pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<AddItemForm>,
) -> Result<Response, ApiError> {
    let outcome = state
        .with_service(move |service| service.add_item(&form.new_item, &form.list))
        .await?;
    respond(Page {
        outcome,
        lists: Vec::new(),
    })
}

pub async fn delete_item(
    State(state): State<AppState>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Response, ApiError> {
    let outcome = state
        .with_service(move |service| service.delete_item(&form.checkbox, &form.list_name))
        .await?;
    respond(Page {
        outcome,
        lists: Vec::new(),
    })
}

pub async fn about() -> Result<Response, ApiError> {
    let body = AboutTemplate
        .render()
        .map_err(|err| ApiError::internal("render_failed", err.to_string()))?;
    Ok(Html(body).into_response())
}

fn with_navigation(service: &SqliteTodoService<'_>, outcome: PageOutcome) -> ServiceResult<Page> {
    let lists = match outcome {
        PageOutcome::Render(_) => service.list_names()?,
        _ => Vec::new(),
    };
    Ok(Page { outcome, lists })
}

fn respond(page: Page) -> Result<Response, ApiError> {
    match page.outcome {
        PageOutcome::Render(list_page) => {
            let body = ListTemplate::new(list_page, page.lists)
                .render()
                .map_err(|err| ApiError::internal("render_failed", err.to_string()))?;
            Ok(Html(body).into_response())
        }
        PageOutcome::Redirect(target) => Ok(Redirect::to(&target_path(&target)).into_response()),
        PageOutcome::Ignored => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
