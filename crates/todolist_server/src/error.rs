//! HTTP error mapping.
//!
//! Policy: validation failures are 400, unknown lists are 404,
//! duplicate list creation is 409, everything else is 500. The body is always
//! one `error_code=<code> message=<text>` line.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use std::fmt::{Display, Formatter};
use todolist_core::TodoServiceError;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error_code={} message={}", self.code, self.message)
    }
}

impl From<TodoServiceError> for ApiError {
    fn from(value: TodoServiceError) -> Self {
        let message = value.to_string();
        match value {
            TodoServiceError::Validation(_) => {
                Self::new(StatusCode::BAD_REQUEST, "validation_failed", message)
            }
            TodoServiceError::ListNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "list_not_found", message)
            }
            TodoServiceError::Conflict(_) => {
                Self::new(StatusCode::CONFLICT, "list_conflict", message)
            }
            TodoServiceError::Store(_) => Self::internal("store_failed", message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(
                "event=http_error module=server status={} error_code={} error={}",
                self.status.as_u16(),
                self.code,
                self.message
            );
        } else {
            warn!(
                "event=http_error module=server status={} error_code={}",
                self.status.as_u16(),
                self.code
            );
        }
        (self.status, format!("{self}\n")).into_response()
    }
}
