use crate::db::schema::create_tables;
use crate::errors::{Error, Result};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Shared handle to the single long-lived `SQLite` connection.
///
/// The tracker has exactly one logical writer, so one connection behind a
/// mutex is enough; the handle is constructed once at startup and passed
/// explicitly to every operation.
pub type DbPool = Arc<Mutex<Connection>>;

/// Opens (creating if absent) the database at `db_path` and ensures the
/// schema exists. Idempotent; safe to call on every startup.
#[instrument]
pub async fn init_db(db_path: &str) -> Result<DbPool> {
    debug!("Initializing database connection to: {}", db_path);
    let conn = Connection::open(db_path)
        .map_err(|e| Error::Database(format!("Failed to open database at {}: {}", db_path, e)))?;

    // Foreign keys are off by default in SQLite; the expenses table relies
    // on the categories FK.
    conn.execute("PRAGMA foreign_keys = ON;", [])
        .map_err(|e| Error::Database(format!("Failed to enable foreign keys: {}", e)))?;

    info!("Database connection opened. Ensuring tables are created...");
    create_tables(&conn)?;

    Ok(Arc::new(Mutex::new(conn)))
}
