#![allow(missing_docs)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A spending bucket with an optional budget ceiling.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    pub id: i64, // Primary key
    pub name: String,
    pub budget: f64, // REAL; 0.0 means "no budget set"
}

/// One row of the `expenses` table.
#[derive(Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64, // REAL; no sign constraint
    pub category_id: i64,
    pub date: NaiveDate, // calendar date, no time-of-day
    pub description: String,
}

/// An expense joined with its category name, as shown in the ledger listing.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: NaiveDate,
    // Populated by the JOIN with categories for display
    pub category: String,
    pub amount: f64,
    pub description: String,
}
