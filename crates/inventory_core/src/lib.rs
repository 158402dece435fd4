//! Core domain logic for the inventory manager.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{category_url, Category, CategoryId};
pub use model::item::{item_url, valuate, Item, ItemId, Valuation};
pub use model::validation::{
    CategoryDraft, CategoryForm, FieldError, FieldErrors, ItemDraft, ItemForm,
};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::{RepoError, RepoResult};
pub use service::category_service::{CategoryDetail, CategoryListing, CategoryService};
pub use service::item_service::{
    InventoryOverview, ItemDetail, ItemEntry, ItemListing, ItemService,
};
pub use service::{Entity, ServiceError, ServiceResult};

/// Category service bound to SQLite repositories sharing one connection.
pub type SqliteCategoryService<'conn> =
    CategoryService<SqliteCategoryRepository<'conn>, SqliteItemRepository<'conn>>;

/// Item service bound to SQLite repositories sharing one connection.
pub type SqliteItemService<'conn> =
    ItemService<SqliteItemRepository<'conn>, SqliteCategoryRepository<'conn>>;

/// Builds a category service over `conn`.
pub fn category_service(conn: &rusqlite::Connection) -> SqliteCategoryService<'_> {
    CategoryService::new(
        SqliteCategoryRepository::new(conn),
        SqliteItemRepository::new(conn),
    )
}

/// Builds an item service over `conn`.
pub fn item_service(conn: &rusqlite::Connection) -> SqliteItemService<'_> {
    ItemService::new(
        SqliteItemRepository::new(conn),
        SqliteCategoryRepository::new(conn),
    )
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
