//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the find/save/count/delete contracts the services depend on.
//! - Isolate SQLite query details from service orchestration.
//! - Translate storage constraint failures into semantic errors.
//!
//! # Invariants
//! - Repository writes call the model `validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - UNIQUE and FOREIGN KEY violations surface as dedicated variants, never
//!   as opaque database errors.

use crate::db::DbError;
use crate::model::validation::FieldErrors;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod category_repo;
pub mod item_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by category and item persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Record failed model invariants before write or after read.
    Validation(FieldErrors),
    Db(DbError),
    NotFound(Uuid),
    /// A UNIQUE constraint rejected the write (e.g. duplicate name).
    UniqueViolation(&'static str),
    /// A FOREIGN KEY constraint rejected the write or delete.
    ForeignKeyViolation(&'static str),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::UniqueViolation(table) => write!(f, "unique constraint failed on `{table}`"),
            Self::ForeignKeyViolation(table) => {
                write!(f, "foreign key constraint failed on `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::UniqueViolation(_)
            | Self::ForeignKeyViolation(_)
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<FieldErrors> for RepoError {
    fn from(value: FieldErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Maps a failed write on `table` to a semantic error when SQLite reports a
/// constraint violation.
///
/// SQLite reports foreign key failures as `SQLITE_CONSTRAINT_FOREIGNKEY`,
/// except for `ON DELETE RESTRICT` actions, which surface as
/// `SQLITE_CONSTRAINT_TRIGGER` with the foreign key message. Both map to
/// [`RepoError::ForeignKeyViolation`].
pub(crate) fn classify_write_error(table: &'static str, err: rusqlite::Error) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, message) = &err {
        if failure.code == ErrorCode::ConstraintViolation {
            match failure.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return RepoError::UniqueViolation(table)
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return RepoError::ForeignKeyViolation(table)
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_TRIGGER
                    if message.as_deref() == Some(FOREIGN_KEY_FAILED) =>
                {
                    return RepoError::ForeignKeyViolation(table)
                }
                _ => {}
            }
        }
    }
    err.into()
}

const FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";

pub(crate) fn parse_uuid(table: &str, column: &str, value: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{value}` in {table}.{column}"))
    })
}
