//! HTTP handlers.
//!
//! # Responsibility
//! - Extract path and form input, call the core services, shape responses.
//!
//! # Invariants
//! - Successful writes answer with a `302 Found` redirect.
//! - Rejections re-render the originating page with status 400.
//! - Malformed ids are treated as missing records (404).

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;
use inventory_core::Entity;
use uuid::Uuid;

use crate::error::AppError;

pub mod categories;
pub mod inventory;
pub mod items;

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

pub(crate) fn rejected_html(body: String) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(ContentType::html())
        .body(body)
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Response decided inside a store job.
///
/// `HttpResponse` is not `Send`, so jobs on the blocking pool return this
/// and the handler converts it afterwards.
pub(crate) enum Reply {
    Redirect(String),
    Rejected(String),
}

impl Reply {
    pub(crate) fn into_response(self) -> HttpResponse {
        match self {
            Reply::Redirect(location) => redirect(&location),
            Reply::Rejected(body) => rejected_html(body),
        }
    }
}

pub(crate) fn parse_id(raw: &str, entity: Entity) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(entity))
}
