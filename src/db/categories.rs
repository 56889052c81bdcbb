use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::models::Category;
use rusqlite::{ErrorCode, OptionalExtension, params};
use tracing::{debug, info, instrument, warn};

/// Seeds the given category names, each with no budget set, inside one
/// transaction.
///
/// Seeding is best-effort: a name that already exists is skipped (the
/// unique-constraint failure is swallowed) so the remaining names still
/// seed. Existing rows keep their budgets.
#[instrument(skip(pool, names))]
pub async fn seed_default_categories(pool: &DbPool, names: &[String]) -> Result<()> {
    info!("Seeding {} default categories.", names.len());
    let mut conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock for seeding".to_string()))?;
    let tx = conn
        .transaction()
        .map_err(|e| Error::Database(format!("Failed to start transaction for seeding: {}", e)))?;

    for name in names {
        let mut stmt_insert =
            tx.prepare_cached("INSERT INTO categories (name, budget) VALUES (?1, 0.0)")?;
        match stmt_insert.execute(params![name]) {
            Ok(_) => debug!("Seeded category '{}'.", name),
            Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
                warn!("Category '{}' already exists. Skipping.", name);
            }
            Err(e) => return Err(e.into()),
        }
    }

    tx.commit()
        .map_err(|e| Error::Database(format!("Failed to commit seeding transaction: {}", e)))?;
    info!("Finished seeding default categories.");
    Ok(())
}

/// All category names in storage-native order (no explicit sort).
#[instrument(skip(pool))]
pub async fn list_category_names(pool: &DbPool) -> Result<Vec<String>> {
    let conn = pool.lock().map_err(|_| {
        Error::Database("Failed to acquire DB lock for listing categories".to_string())
    })?;

    let mut stmt = conn.prepare_cached("SELECT name FROM categories")?;
    let names_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut names = Vec::new();
    for name_result in names_iter {
        names.push(
            name_result
                .map_err(|e| Error::Database(format!("Failed to map category row: {}", e)))?,
        );
    }

    debug!("Fetched {} category names.", names.len());
    Ok(names)
}

/// Looks up a category by exact name match.
#[instrument(skip(pool))]
pub async fn get_category_by_name(pool: &DbPool, name: &str) -> Result<Option<Category>> {
    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock".to_string()))?;

    let mut stmt = conn.prepare_cached("SELECT id, name, budget FROM categories WHERE name = ?1")?;
    let category = stmt
        .query_row(params![name], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                budget: row.get(2)?,
            })
        })
        .optional()?;

    debug!(
        "Category lookup for '{}': {:?}",
        name,
        category.as_ref().map(|c| c.id)
    );
    Ok(category)
}

/// Sets the budget ceiling for the named category.
///
/// `raw_amount` is form input; anything `f64` accepts is stored as-is,
/// negatives included. A name that matches no category is a successful
/// no-op, mirroring the unconditional UPDATE it issues.
#[instrument(skip(pool))]
pub async fn set_budget(pool: &DbPool, name: &str, raw_amount: &str) -> Result<()> {
    let budget = crate::db::parse_amount(raw_amount)?;

    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock for budget update".to_string()))?;
    let rows_affected = conn.execute(
        "UPDATE categories SET budget = ?1 WHERE name = ?2",
        params![budget, name],
    )?;

    if rows_affected == 0 {
        warn!(
            "Budget update for '{}' matched no category. Nothing changed.",
            name
        );
    } else {
        info!("Set budget for category '{}': {}", name, budget);
    }
    Ok(())
}
