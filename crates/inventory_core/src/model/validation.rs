//! Form validation for category and item submissions.
//!
//! # Responsibility
//! - Turn raw, untrusted form fields into typed drafts.
//! - Collect every field problem instead of stopping at the first.
//!
//! # Invariants
//! - Validation is pure: no storage access, no transport types.
//! - Text fields are trimmed before they are checked or stored.
//! - A successful item draft always has `price >= 1` and `stock` in
//!   `1..=999`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Smallest accepted item price.
pub const MIN_PRICE: i64 = 1;
/// Accepted item stock range (inclusive).
pub const MIN_STOCK: u32 = 1;
pub const MAX_STOCK: u32 = 999;

pub const MSG_NAME_REQUIRED: &str = "Name is required.";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Description is required.";
pub const MSG_CATEGORY_REQUIRED: &str = "Category is required.";
pub const MSG_PRICE_NOT_NUMBER: &str = "Price must be a number and cannot be empty.";
pub const MSG_PRICE_TOO_SMALL: &str = "Price must be at least 1.";
pub const MSG_PRICE_TOO_LARGE: &str = "Price is too large.";
pub const MSG_STOCK_RANGE: &str = "Stock must be a positive integer between 1 and 999.";

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name (`name`, `price`, ...).
    pub field: &'static str,
    /// User-facing message.
    pub message: String,
}

/// Ordered list of field errors for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list holding a single error.
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns whether any error targets `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// User-facing messages in submission order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|error| error.message.as_str()).collect()
    }

    /// `Ok(value)` when no errors were collected.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid fields: {joined}")
    }
}

impl Error for FieldErrors {}

/// Raw category form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

/// Validated category fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    /// Validates the submission into a draft.
    pub fn validate(&self) -> Result<CategoryDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &self.name, MSG_NAME_REQUIRED);
        let description = require_text(
            &mut errors,
            "description",
            &self.description,
            MSG_DESCRIPTION_REQUIRED,
        );
        errors.into_result(CategoryDraft { name, description })
    }
}

/// Raw item form submission.
///
/// `category` holds either a category ID or an exact category name; the
/// service layer resolves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

/// Validated item fields with the category reference still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub stock: u32,
}

impl ItemForm {
    /// Validates the submission into a draft.
    pub fn validate(&self) -> Result<ItemDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &self.name, MSG_NAME_REQUIRED);
        let description = require_text(
            &mut errors,
            "description",
            &self.description,
            MSG_DESCRIPTION_REQUIRED,
        );
        let category = require_text(
            &mut errors,
            "category",
            &self.category,
            MSG_CATEGORY_REQUIRED,
        );

        let price = match parse_price(&self.price) {
            Ok(price) => price,
            Err(message) => {
                errors.push("price", message);
                0
            }
        };

        let stock = match parse_stock(&self.stock) {
            Some(stock) => stock,
            None => {
                errors.push("stock", MSG_STOCK_RANGE);
                0
            }
        };

        errors.into_result(ItemDraft {
            name,
            description,
            category,
            price,
            stock,
        })
    }
}

/// Trims `value` and records `message` when nothing is left.
pub(crate) fn require_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
    }
    trimmed.to_string()
}

/// Parses a price: any plain decimal number, truncated toward zero, then
/// required to be at least [`MIN_PRICE`].
pub(crate) fn parse_price(raw: &str) -> Result<i64, &'static str> {
    let raw = raw.trim();
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let digits_only = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    let has_digits = !whole.is_empty() || !fraction.is_empty();
    let fraction_ok = !unsigned.contains('.') || !fraction.is_empty();
    if !has_digits || !fraction_ok || !digits_only(whole) || !digits_only(fraction) {
        return Err(MSG_PRICE_NOT_NUMBER);
    }

    if negative || whole.bytes().all(|byte| byte == b'0') {
        return Err(MSG_PRICE_TOO_SMALL);
    }

    let price = whole.parse::<i64>().map_err(|_| MSG_PRICE_TOO_LARGE)?;
    if price < MIN_PRICE {
        return Err(MSG_PRICE_TOO_SMALL);
    }
    Ok(price)
}

/// Parses a stock count, accepting only integers in `1..=999`.
pub(crate) fn parse_stock(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    if unsigned.is_empty() || !unsigned.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    unsigned
        .parse::<u32>()
        .ok()
        .filter(|stock| (MIN_STOCK..=MAX_STOCK).contains(stock))
}
