//! Derived spending views over the ledger.
//!
//! Three read-only projections: budget standing per category (every
//! category, zero spend included), total spend per calendar month, and
//! total spend per category restricted to categories that have expenses.
//! Each is a single aggregation query; the rows are plain data for a
//! front-end to render.

use crate::db::DbPool;
use crate::errors::{Error, Result};
use tracing::{debug, instrument};

/// One row of the per-category budget view. Every category appears,
/// whether or not it has expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    /// Category name.
    pub category: String,
    /// Configured ceiling; 0.0 means no budget set.
    pub budget: f64,
    /// Sum of this category's expense amounts (0 if none).
    pub spent: f64,
    /// `budget - spent`, or 0.0 when no budget is set.
    pub remaining: f64,
}

/// Total spend for one calendar month, keyed `"YYYY-MM"`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// Month key in `"YYYY-MM"` form.
    pub month: String,
    /// Sum of all expense amounts in that month.
    pub total: f64,
}

/// Total spend for one category. Categories without expenses are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Sum of this category's expense amounts.
    pub total: f64,
}

/// Budget standing for every category, in insertion (id) order.
///
/// Categories with no expenses report `spent` 0 via the LEFT JOIN. A
/// category with no budget set reports `remaining` 0 rather than the
/// negated spend.
#[instrument(skip(pool))]
pub async fn budget_overview(pool: &DbPool) -> Result<Vec<BudgetRow>> {
    let conn = pool.lock().map_err(|_| {
        Error::Database("Failed to acquire DB lock for budget overview".to_string())
    })?;

    let mut stmt = conn.prepare_cached(
        "SELECT categories.name, categories.budget, COALESCE(SUM(expenses.amount), 0.0) AS spent
         FROM categories
         LEFT JOIN expenses ON categories.id = expenses.category_id
         GROUP BY categories.id, categories.name, categories.budget
         ORDER BY categories.id",
    )?;

    let row_iter = stmt.query_map([], |row| {
        let budget: f64 = row.get(1)?;
        let spent: f64 = row.get(2)?;
        let remaining = if budget == 0.0 { 0.0 } else { budget - spent };
        Ok(BudgetRow {
            category: row.get(0)?,
            budget,
            spent,
            remaining,
        })
    })?;

    let mut rows = Vec::new();
    for row_result in row_iter {
        rows.push(
            row_result.map_err(|e| Error::Database(format!("Failed to map budget row: {}", e)))?,
        );
    }

    debug!("Computed budget overview for {} categories.", rows.len());
    Ok(rows)
}

/// Total spend per calendar month across all categories, ascending by
/// month.
#[instrument(skip(pool))]
pub async fn monthly_totals(pool: &DbPool) -> Result<Vec<MonthlyTotal>> {
    let conn = pool.lock().map_err(|_| {
        Error::Database("Failed to acquire DB lock for monthly totals".to_string())
    })?;

    let mut stmt = conn.prepare_cached(
        "SELECT strftime('%Y-%m', date) AS month, SUM(amount)
         FROM expenses
         GROUP BY month
         ORDER BY month",
    )?;

    let row_iter = stmt.query_map([], |row| {
        Ok(MonthlyTotal {
            month: row.get(0)?,
            total: row.get(1)?,
        })
    })?;

    let mut rows = Vec::new();
    for row_result in row_iter {
        rows.push(
            row_result
                .map_err(|e| Error::Database(format!("Failed to map monthly row: {}", e)))?,
        );
    }

    debug!("Computed totals for {} months.", rows.len());
    Ok(rows)
}

/// Total spend per category, restricted to categories that have at least
/// one expense (INNER JOIN). Used for proportional breakdowns, where
/// zero-spend categories carry no weight.
#[instrument(skip(pool))]
pub async fn category_totals(pool: &DbPool) -> Result<Vec<CategoryTotal>> {
    let conn = pool.lock().map_err(|_| {
        Error::Database("Failed to acquire DB lock for category totals".to_string())
    })?;

    let mut stmt = conn.prepare_cached(
        "SELECT categories.name, SUM(expenses.amount)
         FROM expenses
         JOIN categories ON expenses.category_id = categories.id
         GROUP BY categories.name
         ORDER BY categories.name",
    )?;

    let row_iter = stmt.query_map([], |row| {
        Ok(CategoryTotal {
            category: row.get(0)?,
            total: row.get(1)?,
        })
    })?;

    let mut rows = Vec::new();
    for row_result in row_iter {
        rows.push(
            row_result
                .map_err(|e| Error::Database(format!("Failed to map category total: {}", e)))?,
        );
    }

    debug!("Computed totals for {} spent-in categories.", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::db::expenses::add_expense;
    use crate::db::test_utils::{
        direct_insert_category, direct_insert_expense, init_test_tracing, setup_test_db,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_overview_includes_zero_spend_categories() -> Result<()> {
        init_test_tracing();
        let db_pool = setup_test_db().await?;
        {
            let conn = db_pool.lock().unwrap();
            direct_insert_category(&conn, "Groceries", 100.0)?;
            direct_insert_category(&conn, "Rent", 0.0)?;
        }

        let rows = budget_overview(&db_pool).await?;
        assert_eq!(
            rows,
            vec![
                BudgetRow {
                    category: "Groceries".to_string(),
                    budget: 100.0,
                    spent: 0.0,
                    remaining: 100.0,
                },
                BudgetRow {
                    category: "Rent".to_string(),
                    budget: 0.0,
                    spent: 0.0,
                    remaining: 0.0,
                },
            ]
        );

        // The proportional view has nothing to show without expenses.
        assert!(category_totals(&db_pool).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_overview_and_monthly_after_one_expense() -> Result<()> {
        let db_pool = setup_test_db().await?;
        {
            let conn = db_pool.lock().unwrap();
            direct_insert_category(&conn, "Groceries", 100.0)?;
        }

        add_expense(&db_pool, "25.50", "Groceries", date(2024, 1, 15), "milk").await?;

        let months = monthly_totals(&db_pool).await?;
        assert_eq!(
            months,
            vec![MonthlyTotal {
                month: "2024-01".to_string(),
                total: 25.50,
            }]
        );

        let rows = budget_overview(&db_pool).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].budget, 100.0);
        assert_eq!(rows[0].spent, 25.50);
        assert_eq!(rows[0].remaining, 74.50);
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_budget_category_reports_zero_remaining() -> Result<()> {
        let db_pool = setup_test_db().await?;
        {
            let conn = db_pool.lock().unwrap();
            let category_id = direct_insert_category(&conn, "Rent", 0.0)?;
            direct_insert_expense(&conn, 50.0, category_id, date(2024, 4, 1), "")?;
        }

        let rows = budget_overview(&db_pool).await?;
        assert_eq!(rows[0].spent, 50.0);
        assert_eq!(
            rows[0].remaining, 0.0,
            "No budget set reports remaining 0, not -spent"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_monthly_totals_group_and_sort_by_month() -> Result<()> {
        let db_pool = setup_test_db().await?;
        {
            let conn = db_pool.lock().unwrap();
            let category_id = direct_insert_category(&conn, "Groceries", 0.0)?;
            direct_insert_expense(&conn, 10.0, category_id, date(2024, 3, 2), "")?;
            direct_insert_expense(&conn, 5.0, category_id, date(2023, 12, 31), "")?;
            direct_insert_expense(&conn, 7.5, category_id, date(2024, 3, 20), "")?;
            direct_insert_expense(&conn, 1.0, category_id, date(2024, 1, 1), "")?;
        }

        let months = monthly_totals(&db_pool).await?;
        assert_eq!(
            months,
            vec![
                MonthlyTotal {
                    month: "2023-12".to_string(),
                    total: 5.0,
                },
                MonthlyTotal {
                    month: "2024-01".to_string(),
                    total: 1.0,
                },
                MonthlyTotal {
                    month: "2024-03".to_string(),
                    total: 17.5,
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_category_totals_only_lists_spent_in_categories() -> Result<()> {
        let db_pool = setup_test_db().await?;
        {
            let conn = db_pool.lock().unwrap();
            let groceries_id = direct_insert_category(&conn, "Groceries", 100.0)?;
            direct_insert_category(&conn, "Rent", 900.0)?;
            let clothes_id = direct_insert_category(&conn, "Clothes", 0.0)?;
            direct_insert_expense(&conn, 20.0, groceries_id, date(2024, 5, 1), "")?;
            direct_insert_expense(&conn, 12.5, groceries_id, date(2024, 5, 8), "")?;
            direct_insert_expense(&conn, 60.0, clothes_id, date(2024, 5, 2), "")?;
        }

        let totals = category_totals(&db_pool).await?;
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "Clothes".to_string(),
                    total: 60.0,
                },
                CategoryTotal {
                    category: "Groceries".to_string(),
                    total: 32.5,
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_totals_reflect_deletes() -> Result<()> {
        let db_pool = setup_test_db().await?;
        let expense_id;
        {
            let conn = db_pool.lock().unwrap();
            let category_id = direct_insert_category(&conn, "Groceries", 100.0)?;
            expense_id = direct_insert_expense(&conn, 30.0, category_id, date(2024, 6, 3), "")?;
            direct_insert_expense(&conn, 10.0, category_id, date(2024, 6, 4), "")?;
        }

        crate::db::delete_expense(&db_pool, expense_id).await?;

        let rows = budget_overview(&db_pool).await?;
        assert_eq!(rows[0].spent, 10.0);
        assert_eq!(rows[0].remaining, 90.0);

        let months = monthly_totals(&db_pool).await?;
        assert_eq!(months[0].total, 10.0);
        Ok(())
    }
}
