//! Inventory domain model.
//!
//! # Responsibility
//! - Define the canonical `Category` and `Item` records used by core logic.
//! - Provide pure, transport-independent form validation.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - An item references exactly one category.
//! - Derived values (URLs, total value) are computed on read, never stored.

pub mod category;
pub mod item;
pub mod validation;
