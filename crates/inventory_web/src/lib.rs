//! HTTP surface for the inventory manager.
//!
//! # Responsibility
//! - Route requests to item and category handlers.
//! - Keep transport concerns out of `inventory_core`.

use actix_web::web;

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;

use handlers::{categories, inventory, items};

/// Registers every inventory route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(inventory::root))
        .route("/health", web::get().to(inventory::health))
        .service(
            web::scope("/inventory")
                .route("", web::get().to(inventory::overview))
                .route("/", web::get().to(inventory::overview))
                .route("/all", web::get().to(items::list_items))
                .route("/item/{id}", web::get().to(items::item_detail))
                .route("/create/item", web::get().to(items::create_form))
                .route("/create/item", web::post().to(items::create_item))
                .route("/item/{id}/update", web::get().to(items::update_form))
                .route("/item/{id}/update", web::post().to(items::update_item))
                .route("/item/{id}/delete", web::get().to(items::delete_form))
                .route("/item/{id}/delete", web::post().to(items::delete_item))
                .route("/cat", web::get().to(categories::list_categories))
                .route("/cat/{id}", web::get().to(categories::category_detail))
                .route("/create/cat", web::get().to(categories::create_form))
                .route("/create/cat", web::post().to(categories::create_category))
                .route("/cat/{id}/update", web::get().to(categories::update_form))
                .route("/cat/{id}/update", web::post().to(categories::update_category))
                .route("/cat/{id}/delete", web::get().to(categories::delete_form))
                .route("/cat/{id}/delete", web::post().to(categories::delete_category)),
        );
}
