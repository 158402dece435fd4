//! Category domain model.
//!
//! # Responsibility
//! - Define the named grouping that items reference.
//! - Build the canonical detail URL for a category.
//!
//! # Invariants
//! - `name` is non-empty after trimming and unique across categories.
//! - A category is only removable when no item references it.

use crate::model::validation::{
    require_text, CategoryDraft, FieldErrors, MSG_DESCRIPTION_REQUIRED, MSG_NAME_REQUIRED,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a category.
pub type CategoryId = Uuid;

/// Named grouping of inventory items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Creates a category from a validated draft with a generated ID.
    pub fn new(draft: CategoryDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a category with a caller-provided ID.
    pub fn with_id(id: CategoryId, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }

    /// Overwrites all mutable fields with a validated draft.
    pub fn apply(&mut self, draft: CategoryDraft) {
        self.name = draft.name;
        self.description = draft.description;
    }

    /// Detail page path, e.g. `/inventory/cat/{id}`.
    pub fn url(&self) -> String {
        category_url(self.id)
    }

    /// Checks the invariants a stored category must satisfy.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, MSG_NAME_REQUIRED);
        require_text(
            &mut errors,
            "description",
            &self.description,
            MSG_DESCRIPTION_REQUIRED,
        );
        errors.into_result(())
    }
}

/// Detail page path for a category ID.
pub fn category_url(id: CategoryId) -> String {
    format!("/inventory/cat/{id}")
}
