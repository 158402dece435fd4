//! Item use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete APIs for items.
//! - Resolve each item's category and aggregate stock valuation.
//!
//! # Invariants
//! - Every write resolves the submitted category reference first.
//! - Name uniqueness is checked before every write; storage UNIQUE and
//!   FOREIGN KEY violations map to the same user-facing rejections.
//! - Totals are computed from the items returned, never cached.

use crate::model::category::{Category, CategoryId};
use crate::model::item::{valuate, Item, ItemId, Valuation};
use crate::model::validation::{FieldErrors, ItemDraft, ItemForm};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::item_repo::ItemRepository;
use crate::repo::RepoError;
use crate::service::{Entity, ServiceError, ServiceResult};
use log::{info, warn};
use std::collections::HashMap;
use uuid::Uuid;

pub const MSG_CATEGORY_UNKNOWN: &str = "Category does not exist.";

/// An item with its resolved category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub item: Item,
    pub category: Category,
}

/// Every item plus aggregate figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemListing {
    pub entries: Vec<ItemEntry>,
    pub total_items: u64,
    pub valuation: Valuation,
}

/// One item with its resolved category and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub item: Item,
    pub category: Category,
    pub valuation: Valuation,
}

/// Landing page figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryOverview {
    pub total_items: u64,
    pub total_categories: u64,
    pub valuation: Valuation,
}

/// Item service facade over repository implementations.
pub struct ItemService<I: ItemRepository, C: CategoryRepository> {
    items: I,
    categories: C,
}

impl<I: ItemRepository, C: CategoryRepository> ItemService<I, C> {
    pub fn new(items: I, categories: C) -> Self {
        Self { items, categories }
    }

    /// Counts and total valuation across the whole inventory.
    pub fn overview(&self) -> ServiceResult<InventoryOverview> {
        let total_items = self.items.count_items()?;
        let total_categories = self.categories.count_categories()?;
        let items = self.items.list_items()?;
        Ok(InventoryOverview {
            total_items,
            total_categories,
            valuation: valuate(&items),
        })
    }

    /// Lists every item with its category and the aggregate totals.
    pub fn list_items(&self) -> ServiceResult<ItemListing> {
        let items = self.items.list_items()?;
        let categories: HashMap<CategoryId, Category> = self
            .categories
            .list_categories()?
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        let valuation = valuate(&items);
        let total_items = items.len() as u64;
        let entries = items
            .into_iter()
            .map(|item| -> ServiceResult<ItemEntry> {
                let category = categories
                    .get(&item.category_id)
                    .cloned()
                    .ok_or_else(|| dangling_category(&item))?;
                Ok(ItemEntry { item, category })
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(ItemListing {
            entries,
            total_items,
            valuation,
        })
    }

    /// Loads one item, or `NotFound`.
    pub fn get_item(&self, id: ItemId) -> ServiceResult<Item> {
        self.items
            .get_item(id)?
            .ok_or(ServiceError::NotFound(Entity::Item, id))
    }

    /// Loads one item with its category and value.
    pub fn item_detail(&self, id: ItemId) -> ServiceResult<ItemDetail> {
        let item = self.get_item(id)?;
        let category = self
            .categories
            .get_category(item.category_id)?
            .ok_or_else(|| dangling_category(&item))?;
        let valuation = valuate([&item]);
        Ok(ItemDetail {
            item,
            category,
            valuation,
        })
    }

    /// Categories an item may be assigned to, ordered by name.
    pub fn category_choices(&self) -> ServiceResult<Vec<Category>> {
        Ok(self.categories.list_categories()?)
    }

    /// Validates and persists a new item.
    pub fn create_item(&self, form: &ItemForm) -> ServiceResult<Item> {
        let (draft, category_id) = self.validate_with_category(form)?;

        if self.items.find_item_by_name(&draft.name)?.is_some() {
            warn!("event=item_create module=service status=rejected reason=name_taken");
            return Err(ServiceError::NameTaken(Entity::Item));
        }

        let item = Item::new(draft, category_id);
        self.items.create_item(&item).map_err(map_write_error)?;

        info!(
            "event=item_create module=service status=ok item_id={} category_id={}",
            item.id, item.category_id
        );
        Ok(item)
    }

    /// Validates and fully overwrites an existing item.
    pub fn update_item(&self, id: ItemId, form: &ItemForm) -> ServiceResult<Item> {
        let mut item = self.get_item(id)?;
        let (draft, category_id) = self.validate_with_category(form)?;

        if let Some(existing) = self.items.find_item_by_name(&draft.name)? {
            if existing.id != id {
                warn!(
                    "event=item_update module=service status=rejected reason=name_taken item_id={id}"
                );
                return Err(ServiceError::NameTaken(Entity::Item));
            }
        }

        item.apply(draft, category_id);
        self.items.update_item(&item).map_err(map_write_error)?;

        info!("event=item_update module=service status=ok item_id={id}");
        Ok(item)
    }

    /// Removes an item. Items are never referenced, so no guard applies.
    pub fn delete_item(&self, id: ItemId) -> ServiceResult<()> {
        self.items.delete_item(id).map_err(map_write_error)?;
        info!("event=item_delete module=service status=ok item_id={id}");
        Ok(())
    }

    fn validate_with_category(&self, form: &ItemForm) -> ServiceResult<(ItemDraft, CategoryId)> {
        let draft = form.validate()?;
        match self.resolve_category(&draft.category)? {
            Some(category) => Ok((draft, category.id)),
            None => Err(FieldErrors::single("category", MSG_CATEGORY_UNKNOWN).into()),
        }
    }

    /// Accepts either a category ID or an exact category name.
    fn resolve_category(&self, reference: &str) -> ServiceResult<Option<Category>> {
        if let Ok(id) = Uuid::parse_str(reference) {
            if let Some(category) = self.categories.get_category(id)? {
                return Ok(Some(category));
            }
        }
        Ok(self.categories.find_category_by_name(reference)?)
    }
}

fn map_write_error(err: RepoError) -> ServiceError {
    match err {
        RepoError::UniqueViolation(_) => ServiceError::NameTaken(Entity::Item),
        // The category was removed between resolution and write.
        RepoError::ForeignKeyViolation(_) => {
            FieldErrors::single("category", MSG_CATEGORY_UNKNOWN).into()
        }
        RepoError::NotFound(id) => ServiceError::NotFound(Entity::Item, id),
        other => other.into(),
    }
}

fn dangling_category(item: &Item) -> ServiceError {
    RepoError::InvalidData(format!(
        "item {} references missing category {}",
        item.id, item.category_id
    ))
    .into()
}
