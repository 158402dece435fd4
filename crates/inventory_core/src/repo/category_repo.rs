//! Category repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find/save/count/delete APIs over the `categories` table.
//!
//! # Invariants
//! - Names are unique at the storage layer (`UNIQUE(name)`).
//! - Deleting a category still referenced by items fails with
//!   `RepoError::ForeignKeyViolation`.

use crate::model::category::{Category, CategoryId};
use crate::repo::{classify_write_error, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT
    id,
    name,
    description
FROM categories";

const TABLE: &str = "categories";

/// Repository interface for category persistence.
pub trait CategoryRepository {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId>;
    fn update_category(&self, category: &Category) -> RepoResult<()>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    fn find_category_by_name(&self, name: &str) -> RepoResult<Option<Category>>;
    /// All categories ordered by name.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn count_categories(&self) -> RepoResult<u64>;
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        category.validate()?;

        self.conn
            .execute(
                "INSERT INTO categories (id, name, description) VALUES (?1, ?2, ?3);",
                params![
                    category.id.to_string(),
                    category.name.as_str(),
                    category.description.as_str(),
                ],
            )
            .map_err(|err| classify_write_error(TABLE, err))?;

        Ok(category.id)
    }

    fn update_category(&self, category: &Category) -> RepoResult<()> {
        category.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE categories
                 SET
                    name = ?1,
                    description = ?2,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?3;",
                params![
                    category.name.as_str(),
                    category.description.as_str(),
                    category.id.to_string(),
                ],
            )
            .map_err(|err| classify_write_error(TABLE, err))?;

        if changed == 0 {
            return Err(RepoError::NotFound(category.id));
        }

        Ok(())
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        self.query_one(
            &format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"),
            id.to_string(),
        )
    }

    fn find_category_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        self.query_one(
            &format!("{CATEGORY_SELECT_SQL} WHERE name = ?1;"),
            name.to_string(),
        )
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY name ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }

    fn count_categories(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1;", [id.to_string()])
            .map_err(|err| classify_write_error(TABLE, err))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

impl SqliteCategoryRepository<'_> {
    fn query_one(&self, sql: &str, key: String) -> RepoResult<Option<Category>> {
        let mut stmt = self.conn.prepare(sql)?;
        let row = stmt
            .query_row([key], |row| Ok(parse_category_row(row)))
            .optional()?;
        row.transpose()
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let id_text: String = row.get("id")?;
    let category = Category {
        id: parse_uuid(TABLE, "id", &id_text)?,
        name: row.get("name")?,
        description: row.get("description")?,
    };
    category.validate()?;
    Ok(category)
}
