#![allow(dead_code)]
use crate::db::{DbPool, schema};
use crate::errors::{Error, Result};
use crate::models::{Category, Expense};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer() // Crucial for `cargo test` output
        .try_init(); // Use try_init to avoid panic if already initialized
}

// Fresh in-memory database with the schema applied, one per test.
pub(crate) async fn setup_test_db() -> Result<DbPool> {
    let conn = Connection::open_in_memory()
        .map_err(|e| Error::Database(format!("Test DB: Failed to open in-memory: {}", e)))?;
    conn.execute("PRAGMA foreign_keys = ON;", [])
        .map_err(|e| Error::Database(format!("Test DB: Failed to enable foreign keys: {}", e)))?;
    schema::create_tables(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

// The five category names a fresh install seeds.
pub(crate) fn default_category_names() -> Vec<String> {
    [
        "Groceries",
        "Rent",
        "Entertainment",
        "Transportation",
        "Clothes",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

// Direct insert for test setup, bypassing the seeding logic.
pub(crate) fn direct_insert_category(conn: &Connection, name: &str, budget: f64) -> Result<i64> {
    let mut stmt = conn.prepare_cached("INSERT INTO categories (name, budget) VALUES (?1, ?2)")?;
    let id = stmt.insert(params![name, budget])?;
    Ok(id)
}

// Direct insert for test setup, bypassing amount parsing and name lookup.
pub(crate) fn direct_insert_expense(
    conn: &Connection,
    amount: f64,
    category_id: i64,
    date: NaiveDate,
    description: &str,
) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO expenses (amount, category_id, date, description)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    let id = stmt.insert(params![amount, category_id, date, description])?;
    Ok(id)
}

// Fetch helpers for test verification.
pub(crate) fn get_category_by_id_for_test(conn: &Connection, id: i64) -> Result<Option<Category>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, budget FROM categories WHERE id = ?1")?;
    stmt.query_row(params![id], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            budget: row.get(2)?,
        })
    })
    .optional()
    .map_err(Error::from)
}

pub(crate) fn get_expense_by_id_for_test(conn: &Connection, id: i64) -> Result<Option<Expense>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, amount, category_id, date, description FROM expenses WHERE id = ?1",
    )?;
    stmt.query_row(params![id], |row| {
        Ok(Expense {
            id: row.get(0)?,
            amount: row.get(1)?,
            category_id: row.get(2)?,
            date: row.get(3)?,
            description: row.get(4)?,
        })
    })
    .optional()
    .map_err(Error::from)
}

pub(crate) fn count_expenses_for_test(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
    Ok(count)
}
