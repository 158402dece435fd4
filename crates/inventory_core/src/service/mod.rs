//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validate -> check -> mutate sequences for items and
//!   categories.
//! - Keep transport layers decoupled from storage details.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Every rejection a user can fix is reported as a `ServiceError` variant
//!   carrying a user-facing message; only `Repo` is an unexpected failure.

use crate::model::validation::FieldErrors;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod category_service;
pub mod item_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Which record type an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Category,
    Item,
}

impl Entity {
    /// Capitalized label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Item => "Item",
        }
    }
}

/// Use-case error for item and category workflows.
#[derive(Debug)]
pub enum ServiceError {
    /// Submitted fields failed validation.
    Invalid(FieldErrors),
    /// Another record of the same kind already owns the name.
    NameTaken(Entity),
    /// Category delete blocked by referencing items.
    CategoryInUse { category_id: Uuid, item_count: u64 },
    NotFound(Entity, Uuid),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl ServiceError {
    /// Whether the user can fix this by changing their submission.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Invalid(_) | Self::NameTaken(_) | Self::CategoryInUse { .. }
        )
    }

    /// Messages to show next to the submitted form.
    ///
    /// Empty for not-found and persistence failures.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => errors.iter().map(|err| err.message.clone()).collect(),
            Self::NameTaken(entity) => vec![format!(
                "{} name already exists. Please choose a different name.",
                entity.label()
            )],
            Self::CategoryInUse { item_count, .. } => vec![format!(
                "This category contains {item_count} item(s). Please remove or re-categorize them before proceeding."
            )],
            Self::NotFound(..) | Self::Repo(_) => Vec::new(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "{errors}"),
            Self::NameTaken(entity) => write!(f, "{} name already exists", entity.label()),
            Self::CategoryInUse {
                category_id,
                item_count,
            } => write!(
                f,
                "category {category_id} is referenced by {item_count} item(s)"
            ),
            Self::NotFound(entity, id) => write!(f, "{} not found: {id}", entity.label()),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(value: FieldErrors) -> Self {
        Self::Invalid(value)
    }
}
