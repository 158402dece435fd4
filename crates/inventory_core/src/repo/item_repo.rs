//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide find/save/count/delete APIs over the `items` table.
//! - Answer "which items reference this category" for delete guards.
//!
//! # Invariants
//! - Names are unique at the storage layer (`UNIQUE(name)`).
//! - `category_id` must reference an existing category; violations surface
//!   as `RepoError::ForeignKeyViolation`.

use crate::model::category::CategoryId;
use crate::model::item::{Item, ItemId};
use crate::repo::{classify_write_error, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    category_id,
    price,
    stock
FROM items";

const TABLE: &str = "items";

/// Repository interface for item persistence.
pub trait ItemRepository {
    fn create_item(&self, item: &Item) -> RepoResult<ItemId>;
    fn update_item(&self, item: &Item) -> RepoResult<()>;
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    fn find_item_by_name(&self, name: &str) -> RepoResult<Option<Item>>;
    /// All items ordered by name.
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    /// Items referencing `category_id`, ordered by name.
    fn list_items_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Item>>;
    fn count_items(&self) -> RepoResult<u64>;
    fn count_items_by_category(&self, category_id: CategoryId) -> RepoResult<u64>;
    fn delete_item(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &Item) -> RepoResult<ItemId> {
        item.validate()?;

        self.conn
            .execute(
                "INSERT INTO items (
                    id,
                    name,
                    description,
                    category_id,
                    price,
                    stock
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    item.id.to_string(),
                    item.name.as_str(),
                    item.description.as_str(),
                    item.category_id.to_string(),
                    item.price,
                    item.stock,
                ],
            )
            .map_err(|err| classify_write_error(TABLE, err))?;

        Ok(item.id)
    }

    fn update_item(&self, item: &Item) -> RepoResult<()> {
        item.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE items
                 SET
                    name = ?1,
                    description = ?2,
                    category_id = ?3,
                    price = ?4,
                    stock = ?5,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?6;",
                params![
                    item.name.as_str(),
                    item.description.as_str(),
                    item.category_id.to_string(),
                    item.price,
                    item.stock,
                    item.id.to_string(),
                ],
            )
            .map_err(|err| classify_write_error(TABLE, err))?;

        if changed == 0 {
            return Err(RepoError::NotFound(item.id));
        }

        Ok(())
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id.to_string()], |row| Ok(parse_item_row(row)))
            .optional()?;
        row.transpose()
    }

    fn find_item_by_name(&self, name: &str) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE name = ?1;"))?;
        let row = stmt
            .query_row([name], |row| Ok(parse_item_row(row)))
            .optional()?;
        row.transpose()
    }

    fn list_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY name ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        collect_items(&mut rows)
    }

    fn list_items_by_category(&self, category_id: CategoryId) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE category_id = ?1
             ORDER BY name ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([category_id.to_string()])?;
        collect_items(&mut rows)
    }

    fn count_items(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    fn count_items_by_category(&self, category_id: CategoryId) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM items WHERE category_id = ?1;",
            [category_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as u64)
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn collect_items(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<Item>> {
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }
    Ok(items)
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let id_text: String = row.get("id")?;
    let category_text: String = row.get("category_id")?;

    let stock_value: i64 = row.get("stock")?;
    let stock = u32::try_from(stock_value).map_err(|_| {
        RepoError::InvalidData(format!("invalid stock value `{stock_value}` in items.stock"))
    })?;

    let item = Item {
        id: parse_uuid(TABLE, "id", &id_text)?,
        name: row.get("name")?,
        description: row.get("description")?,
        category_id: parse_uuid(TABLE, "category_id", &category_text)?,
        price: row.get("price")?,
        stock,
    };
    item.validate()?;
    Ok(item)
}
