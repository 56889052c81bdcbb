use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::models::ExpenseRecord;
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};
use tracing::{debug, info, instrument};

/// Records a new expense and returns its id.
///
/// `raw_amount` is form input and must parse as a number. `category_name`
/// must resolve to an existing category by exact name match; an unknown
/// name is an explicit [`Error::CategoryNotFound`] and leaves the ledger
/// untouched.
#[instrument(skip(pool, description))]
pub async fn add_expense(
    pool: &DbPool,
    raw_amount: &str,
    category_name: &str,
    date: NaiveDate,
    description: &str,
) -> Result<i64> {
    let amount = crate::db::parse_amount(raw_amount)?;

    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock for expense insert".to_string()))?;

    // Resolve the category before touching the ledger so an unknown name
    // leaves no partial write behind.
    let mut stmt_find = conn.prepare_cached("SELECT id FROM categories WHERE name = ?1")?;
    let category_id: Option<i64> = stmt_find
        .query_row(params![category_name], |row| row.get(0))
        .optional()?;
    let Some(category_id) = category_id else {
        return Err(Error::CategoryNotFound(category_name.to_string()));
    };

    let mut stmt_insert = conn.prepare_cached(
        "INSERT INTO expenses (amount, category_id, date, description)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    let expense_id = stmt_insert.insert(params![amount, category_id, date, description])?;

    info!(
        "Created expense_id {} in category '{}' (id {}): amount={}, date={}",
        expense_id, category_name, category_id, amount, date
    );
    Ok(expense_id)
}

/// Deletes the expense with the given id. An id that matches no row is a
/// successful no-op.
#[instrument(skip(pool))]
pub async fn delete_expense(pool: &DbPool, expense_id: i64) -> Result<()> {
    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock for expense delete".to_string()))?;

    let rows_affected = conn.execute("DELETE FROM expenses WHERE id = ?1", params![expense_id])?;

    if rows_affected == 0 {
        debug!("Delete for expense_id {} matched no row.", expense_id);
    } else {
        info!("Deleted expense_id {}.", expense_id);
    }
    Ok(())
}

/// All expenses joined with their category name, newest date first.
#[instrument(skip(pool))]
pub async fn list_expenses(pool: &DbPool) -> Result<Vec<ExpenseRecord>> {
    let conn = pool.lock().map_err(|_| {
        Error::Database("Failed to acquire DB lock for listing expenses".to_string())
    })?;

    let mut stmt = conn.prepare_cached(
        "SELECT expenses.id, expenses.date, categories.name, expenses.amount, expenses.description
         FROM expenses
         JOIN categories ON expenses.category_id = categories.id
         ORDER BY expenses.date DESC",
    )?;

    let record_iter = stmt.query_map([], |row| {
        Ok(ExpenseRecord {
            id: row.get(0)?,
            date: row.get(1)?,
            category: row.get(2)?,
            amount: row.get(3)?,
            description: row.get(4)?,
        })
    })?;

    let mut records = Vec::new();
    for record_result in record_iter {
        records.push(
            record_result
                .map_err(|e| Error::Database(format!("Failed to map expense row: {}", e)))?,
        );
    }

    debug!("Fetched {} expenses.", records.len());
    Ok(records)
}
