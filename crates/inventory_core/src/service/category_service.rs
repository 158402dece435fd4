//! Category use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete APIs for categories.
//! - Guard deletes against referencing items.
//!
//! # Invariants
//! - Name uniqueness is checked before every write; a storage-level UNIQUE
//!   violation from a concurrent writer maps to the same rejection.
//! - A category is deleted only when zero items reference it.

use crate::model::category::{Category, CategoryId};
use crate::model::item::{valuate, Item, Valuation};
use crate::model::validation::CategoryForm;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::item_repo::ItemRepository;
use crate::repo::RepoError;
use crate::service::{Entity, ServiceError, ServiceResult};
use log::{info, warn};

/// All categories with their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub categories: Vec<Category>,
    pub total: u64,
}

/// One category with every item that references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDetail {
    pub category: Category,
    pub items: Vec<Item>,
    pub valuation: Valuation,
}

/// Category service facade over repository implementations.
pub struct CategoryService<C: CategoryRepository, I: ItemRepository> {
    categories: C,
    items: I,
}

impl<C: CategoryRepository, I: ItemRepository> CategoryService<C, I> {
    pub fn new(categories: C, items: I) -> Self {
        Self { categories, items }
    }

    /// Lists every category with the total count.
    pub fn list_categories(&self) -> ServiceResult<CategoryListing> {
        let categories = self.categories.list_categories()?;
        let total = self.categories.count_categories()?;
        Ok(CategoryListing { categories, total })
    }

    /// Loads one category, or `NotFound`.
    pub fn get_category(&self, id: CategoryId) -> ServiceResult<Category> {
        self.categories
            .get_category(id)?
            .ok_or(ServiceError::NotFound(Entity::Category, id))
    }

    /// Loads one category together with its items.
    ///
    /// Also backs the delete confirmation page.
    pub fn category_detail(&self, id: CategoryId) -> ServiceResult<CategoryDetail> {
        let category = self.get_category(id)?;
        let items = self.items.list_items_by_category(id)?;
        let valuation = valuate(&items);
        Ok(CategoryDetail {
            category,
            items,
            valuation,
        })
    }

    /// Validates and persists a new category.
    pub fn create_category(&self, form: &CategoryForm) -> ServiceResult<Category> {
        let draft = form.validate()?;

        if self.categories.find_category_by_name(&draft.name)?.is_some() {
            warn!("event=category_create module=service status=rejected reason=name_taken");
            return Err(ServiceError::NameTaken(Entity::Category));
        }

        let category = Category::new(draft);
        self.categories
            .create_category(&category)
            .map_err(map_write_error)?;

        info!(
            "event=category_create module=service status=ok category_id={}",
            category.id
        );
        Ok(category)
    }

    /// Validates and overwrites an existing category.
    pub fn update_category(&self, id: CategoryId, form: &CategoryForm) -> ServiceResult<Category> {
        let mut category = self.get_category(id)?;
        let draft = form.validate()?;

        if let Some(existing) = self.categories.find_category_by_name(&draft.name)? {
            if existing.id != id {
                warn!(
                    "event=category_update module=service status=rejected reason=name_taken category_id={id}"
                );
                return Err(ServiceError::NameTaken(Entity::Category));
            }
        }

        category.apply(draft);
        self.categories
            .update_category(&category)
            .map_err(map_write_error)?;

        info!("event=category_update module=service status=ok category_id={id}");
        Ok(category)
    }

    /// Deletes a category that no item references.
    ///
    /// # Errors
    /// - `NotFound` when the category does not exist.
    /// - `CategoryInUse` with the exact blocking count otherwise.
    pub fn delete_category(&self, id: CategoryId) -> ServiceResult<()> {
        self.get_category(id)?;

        let item_count = self.items.count_items_by_category(id)?;
        if item_count > 0 {
            warn!(
                "event=category_delete module=service status=rejected reason=in_use category_id={id} item_count={item_count}"
            );
            return Err(ServiceError::CategoryInUse {
                category_id: id,
                item_count,
            });
        }

        match self.categories.delete_category(id) {
            Ok(()) => {}
            Err(RepoError::ForeignKeyViolation(_)) => {
                // An item was attached after the count above.
                let item_count = self.items.count_items_by_category(id)?.max(1);
                return Err(ServiceError::CategoryInUse {
                    category_id: id,
                    item_count,
                });
            }
            Err(RepoError::NotFound(_)) => {
                return Err(ServiceError::NotFound(Entity::Category, id));
            }
            Err(err) => return Err(err.into()),
        }

        info!("event=category_delete module=service status=ok category_id={id}");
        Ok(())
    }
}

fn map_write_error(err: RepoError) -> ServiceError {
    match err {
        RepoError::UniqueViolation(_) => ServiceError::NameTaken(Entity::Category),
        RepoError::NotFound(id) => ServiceError::NotFound(Entity::Category, id),
        other => other.into(),
    }
}
