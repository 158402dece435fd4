//! Inventory schema migrations.
//!
//! # Responsibility
//! - List every schema step for the inventory store, oldest first.
//! - Upgrade a store in one transaction, then verify item references.
//!
//! # Invariants
//! - Versions strictly increase; `PRAGMA user_version` records the last
//!   applied step.
//! - A failed step leaves the store at its previous version.

use crate::db::{DbError, DbResult};
use log::{info, warn};
use rusqlite::Connection;

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "categories_and_items",
    sql: include_str!("0001_init.sql"),
}];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` to [`latest_version`] and checks that every item still
/// references an existing category.
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the store is newer than
///   this build.
/// - [`DbError::OrphanedItems`] when item rows reference missing
///   categories (possible in files written with `foreign_keys` off).
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version = stored_version(conn)?;
    let latest = latest_version();

    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    if from_version < latest {
        let tx = conn.transaction()?;
        for migration in MIGRATIONS.iter().filter(|m| m.version > from_version) {
            tx.execute_batch(migration.sql)?;
            tx.pragma_update(None, "user_version", migration.version)?;
            info!(
                "event=db_migrate module=db status=step version={} name={}",
                migration.version, migration.name
            );
        }
        tx.commit()?;
        info!(
            "event=db_migrate module=db status=ok from_version={} to_version={}",
            from_version, latest
        );
    }

    let orphaned = orphaned_item_count(conn)?;
    if orphaned > 0 {
        warn!("event=db_migrate module=db status=error error_code=orphaned_items count={orphaned}");
        return Err(DbError::OrphanedItems { count: orphaned });
    }
    Ok(())
}

fn stored_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

fn orphaned_item_count(conn: &Connection) -> DbResult<u64> {
    let mut stmt = conn.prepare("PRAGMA foreign_key_check(items);")?;
    let mut rows = stmt.query([])?;
    let mut count = 0;
    while rows.next()?.is_some() {
        count += 1;
    }
    Ok(count)
}
