//! Expense tracker core - categories, budgets, and spending reports over a
//! local `SQLite` store.
//!
//! The crate records dated, categorized expenses, tracks per-category budget
//! ceilings, and derives the aggregation rows (per category, per month) that
//! a front-end renders as tables or charts. A thin CLI in [`cli`] is the
//! bundled front-end; it consumes only the operations exposed by [`db`].

// Deny the most critical lints that could lead to bugs
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
// Allow some pedantic lints that are too noisy here
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Command-line front-end - argument parsing and plain-text rendering
pub mod cli;
/// Configuration loading for the database path and default categories
pub mod config;
/// `SQLite` storage - connection, schema, category registry, expense ledger,
/// and the derived spending reports
pub mod db;
/// Unified error types and result handling
pub mod errors;
/// Row types mirroring the database tables
pub mod models;
