use std::fmt;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// The route-level operation a storage failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Create,
    Update,
    Delete,
    DeleteAll,
}

impl Action {
    /// Message sent to clients in place of the storage error.
    fn public_message(self) -> &'static str {
        match self {
            Action::List => "Failed to fetch todos",
            Action::Create => "Failed to create todo",
            Action::Update => "Failed to update todo",
            Action::Delete => "Failed to delete todo",
            Action::DeleteAll => "Failed to delete todos",
        }
    }

    /// Only a failed create echoes the storage error back to the caller.
    fn exposes_detail(self) -> bool {
        matches!(self, Action::Create)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::List => "GET /api/todos",
            Action::Create => "POST /api/todos",
            Action::Update => "PUT /api/todos/{id}",
            Action::Delete => "DELETE /api/todos/{id}",
            Action::DeleteAll => "DELETE /api/todos",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error in {action}: {source}")]
    Database {
        action: Action,
        #[source]
        source: sqlx::Error,
    },

    #[error("Todo {0} not found")]
    NotFound(i64),

    #[error("Invalid request body: {0}")]
    Json(#[from] JsonRejection),

    #[error("Invalid path: {0}")]
    Path(#[from] PathRejection),
}

impl AppError {
    /// Tags a storage error with the action it came from, for use with `map_err`.
    pub fn database(action: Action) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Database { action, source }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(id) => {
                warn!("todo {} not found", id);
                (StatusCode::NOT_FOUND, "todo not found".to_string())
            }
            AppError::Json(rejection) => {
                warn!("rejected request body: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
            AppError::Path(rejection) => {
                warn!("rejected path: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
            AppError::Database { action, source } => {
                error!(%action, "database error: {}", source);
                let message = if action.exposes_detail() {
                    source.to_string()
                } else {
                    action.public_message().to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
