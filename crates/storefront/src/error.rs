//! Unified error handling with Sentry integration.
//!
//! All route handlers return `Result<T, AppError>`. Every error becomes a JSON
//! body of the form `{"detail": ...}`; server-side failures are captured to
//! Sentry before responding and their text is truncated.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flori_mart_core::{ValidationError, ValidationErrors};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Longest diagnostic text returned for a server-side failure.
const MAX_DETAIL_CHARS: usize = 120;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed schema validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A path identifier was not in a valid format.
    #[error("Malformed identifier: {0}")]
    MalformedId(ValidationError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client (unparseable body or query string).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Store operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::MalformedId(e) => Self::MalformedId(e),
            RepositoryError::NotFound(kind) => Self::NotFound(format!("{} not found", kind.label())),
            other => Self::Database(other),
        }
    }
}

/// Cut `text` down to `max` characters.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, json!(errors)),
            Self::MalformedId(error) => (StatusCode::BAD_REQUEST, json!([error])),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, json!(message)),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, json!(message)),
            Self::Database(err) => {
                let event_id = sentry::capture_error(&err);
                tracing::error!(
                    error = %err,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(truncate(&err.to_string(), MAX_DETAIL_CHARS)),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for a storefront action.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}
