pub mod categories;
pub mod connection;
pub mod expenses;
pub mod reports;
pub(crate) mod schema;
#[cfg(test)]
pub(crate) mod test_utils;

pub use categories::{
    get_category_by_name, list_category_names, seed_default_categories, set_budget,
};
pub use connection::{DbPool, init_db};
pub use expenses::{add_expense, delete_expense, list_expenses};
pub use reports::{budget_overview, category_totals, monthly_totals};

use crate::errors::{Error, Result};

/// Parses raw form input into a monetary amount.
///
/// Anything `f64` accepts is permitted, including negative values; the
/// tracker enforces no sign convention on amounts or budgets.
pub(crate) fn parse_amount(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::Validation(format!("'{}' is not a valid amount", raw)))
}
