//! HTTP error mapping.
//!
//! # Responsibility
//! - Turn service and infrastructure failures into bare responses.
//!
//! # Invariants
//! - Missing records become plain-text 404s, never server errors.
//! - Persistence detail is logged, never rendered.
//! - Form rejections are rendered by handlers; one reaching this type is
//!   answered with a plain-text 400.

use actix_web::{error::BlockingError, http::header::ContentType, http::StatusCode};
use actix_web::{HttpResponse, ResponseError};
use inventory_core::{Entity, ServiceError};
use log::error;
use std::fmt;

/// Result type for handlers
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Requested record does not exist (or the id is malformed)
    NotFound(Entity),

    /// Rejection that escaped form rendering.
    ///
    /// Only built by `From<ServiceError>` for rejection variants. Form
    /// handlers match rejections before `?`, so this answers a plain 400 for
    /// any call site that propagates one instead.
    Rejected(Vec<String>),

    /// Persistence failure
    Database(String),

    /// Worker pool or other infrastructure failure
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(entity) => write!(f, "{} not found", entity.label()),
            AppError::Rejected(messages) => write!(f, "{}", messages.join(" ")),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::NotFound(_) | AppError::Rejected(_) => HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
            AppError::Database(_) | AppError::Internal(_) => {
                // Detail stays in the log; the page is generic.
                error!(
                    "event=http_request module=web status=error error_code=internal error={}",
                    self
                );
                HttpResponse::build(status)
                    .content_type(ContentType::html())
                    .body(crate::views::error_page(status))
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(entity, _) => AppError::NotFound(entity),
            ServiceError::Repo(repo) => AppError::Database(repo.to_string()),
            rejection => AppError::Rejected(rejection.user_messages()),
        }
    }
}

impl From<BlockingError> for AppError {
    fn from(err: BlockingError) -> Self {
        AppError::Internal(err.to_string())
    }
}
