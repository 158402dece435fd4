//! Item domain model and stock valuation.
//!
//! # Responsibility
//! - Define the stocked product record and its derived values.
//! - Aggregate stock and value over any collection of items.
//!
//! # Invariants
//! - `price >= 1` and `1 <= stock <= 999` for every stored item.
//! - `category_id` references exactly one existing category.
//! - Total value is `stock * price`, computed on read and never persisted.

use crate::model::category::CategoryId;
use crate::model::validation::{
    require_text, FieldErrors, ItemDraft, MAX_STOCK, MIN_PRICE, MIN_STOCK,
    MSG_DESCRIPTION_REQUIRED, MSG_NAME_REQUIRED, MSG_PRICE_TOO_SMALL, MSG_STOCK_RANGE,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an item.
pub type ItemId = Uuid;

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category_id: CategoryId,
    /// Unit price in whole currency units.
    pub price: i64,
    /// Units on hand.
    pub stock: u32,
}

impl Item {
    /// Creates an item from a validated draft and a resolved category.
    pub fn new(draft: ItemDraft, category_id: CategoryId) -> Self {
        Self::with_id(Uuid::new_v4(), draft, category_id)
    }

    /// Creates an item with a caller-provided ID.
    pub fn with_id(id: ItemId, draft: ItemDraft, category_id: CategoryId) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category_id,
            price: draft.price,
            stock: draft.stock,
        }
    }

    /// Overwrites every mutable field (full replacement update).
    pub fn apply(&mut self, draft: ItemDraft, category_id: CategoryId) {
        self.name = draft.name;
        self.description = draft.description;
        self.category_id = category_id;
        self.price = draft.price;
        self.stock = draft.stock;
    }

    /// Detail page path, e.g. `/inventory/item/{id}`.
    pub fn url(&self) -> String {
        item_url(self.id)
    }

    /// Value of the units on hand.
    pub fn total_value(&self) -> i128 {
        i128::from(self.stock) * i128::from(self.price)
    }

    /// Checks the invariants a stored item must satisfy.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, MSG_NAME_REQUIRED);
        require_text(
            &mut errors,
            "description",
            &self.description,
            MSG_DESCRIPTION_REQUIRED,
        );
        if self.price < MIN_PRICE {
            errors.push("price", MSG_PRICE_TOO_SMALL);
        }
        if !(MIN_STOCK..=MAX_STOCK).contains(&self.stock) {
            errors.push("stock", MSG_STOCK_RANGE);
        }
        errors.into_result(())
    }
}

/// Detail page path for an item ID.
pub fn item_url(id: ItemId) -> String {
    format!("/inventory/item/{id}")
}

/// Aggregate stock figures for a set of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Valuation {
    /// Sum of `stock * price`.
    pub total_value: i128,
    /// Sum of `stock`.
    pub total_units: u64,
}

/// Sums value and units over `items`.
///
/// Accumulates in wide integers so the result is exact for any number of
/// valid items.
pub fn valuate<'a>(items: impl IntoIterator<Item = &'a Item>) -> Valuation {
    items
        .into_iter()
        .fold(Valuation::default(), |mut acc, item| {
            acc.total_value += item.total_value();
            acc.total_units += u64::from(item.stock);
            acc
        })
}
