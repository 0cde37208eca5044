//! HTTP surface for the todolist core.
//!
//! # Responsibility
//! - Map routes to `TodoService` page operations.
//! - Translate page outcomes and service errors into HTTP responses.
//!
//! # Invariants
//! - Handlers never hold the store lock across an await point.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

use axum::routing::{get, post};
use axum::Router;

pub use config::{ConfigError, DbLocation, ServerConfig};
pub use error::ApiError;
pub use state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::view_today).post(handlers::add_item))
        .route("/delete", post(handlers::delete_item))
        .route("/about", get(handlers::about))
        .route("/:name", get(handlers::view_list))
        .with_state(state)
}
