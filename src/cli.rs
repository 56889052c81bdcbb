//! Command-line front-end.
//!
//! Parses the subcommands, hands them to the storage operations, and
//! prints plain-text tables. Amounts and budgets are passed through as the
//! raw strings the user typed; the storage layer owns their validation.

use crate::db::{self, DbPool};
use crate::errors::{Error, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

/// Top-level argument parser.
#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track expenses and per-category budgets from the command line"
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// The operations the front-end exposes.
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. 25.50)
        amount: String,
        /// Category the expense belongs to
        category: String,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },
    /// List recorded expenses, newest first
    List,
    /// Delete an expense by id
    Delete {
        /// Id shown by `list`
        id: i64,
    },
    /// List category names
    Categories,
    /// Set the budget ceiling for a category
    SetBudget {
        /// Category to update
        category: String,
        /// New budget amount (0 clears the ceiling)
        amount: String,
    },
    /// Show spending reports
    #[command(subcommand)]
    Report(ReportCommands),
}

/// The derived views over the ledger.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Budget, spent, and remaining per category
    Budget,
    /// Total spend per calendar month
    Monthly,
    /// Total spend per category (categories with expenses only)
    Category,
}

/// Dispatches one parsed command against the store.
pub async fn run_command(pool: &DbPool, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Local::now().date_naive(),
            };
            let expense_id = db::add_expense(pool, &amount, &category, date, &description).await?;
            println!("Recorded expense {expense_id} in '{category}'.");
        }
        Commands::List => {
            let records = db::list_expenses(pool).await?;
            if records.is_empty() {
                println!("No expenses recorded.");
            } else {
                println!(
                    "{:<6} {:<12} {:<16} {:>10}  {}",
                    "ID", "Date", "Category", "Amount", "Description"
                );
                for record in records {
                    println!(
                        "{:<6} {:<12} {:<16} {:>10}  {}",
                        record.id,
                        record.date.to_string(),
                        record.category,
                        format_amount(record.amount),
                        record.description
                    );
                }
            }
        }
        Commands::Delete { id } => {
            db::delete_expense(pool, id).await?;
            println!("Deleted expense {id} (if it existed).");
        }
        Commands::Categories => {
            for name in db::list_category_names(pool).await? {
                println!("{name}");
            }
        }
        Commands::SetBudget { category, amount } => {
            db::set_budget(pool, &category, &amount).await?;
            println!("Budget for '{category}' set to {amount}.");
        }
        Commands::Report(report) => run_report(pool, report).await?,
    }
    Ok(())
}

async fn run_report(pool: &DbPool, report: ReportCommands) -> Result<()> {
    match report {
        ReportCommands::Budget => {
            println!(
                "{:<16} {:>10} {:>10} {:>10}",
                "Category", "Budget", "Spent", "Remaining"
            );
            for row in db::budget_overview(pool).await? {
                println!(
                    "{:<16} {:>10} {:>10} {:>10}",
                    row.category,
                    format_amount(row.budget),
                    format_amount(row.spent),
                    format_amount(row.remaining)
                );
            }
        }
        ReportCommands::Monthly => {
            for row in db::monthly_totals(pool).await? {
                println!("{:<8} {:>10}", row.month, format_amount(row.total));
            }
        }
        ReportCommands::Category => {
            for row in db::category_totals(pool).await? {
                println!("{:<16} {:>10}", row.category, format_amount(row.total));
            }
        }
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        Error::Validation(format!("'{raw}' is not a valid date (expected YYYY-MM-DD)"))
    })
}

/// Formats a monetary value like `$25.50` (or `-$25.50`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}
