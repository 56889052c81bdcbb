use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{env, fs, path::Path};

fn default_database_path() -> String {
    "expenses.db".to_string()
}

// The categories every fresh database starts with.
fn default_categories() -> Vec<String> {
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

/// Application configuration, normally read from `config.toml`.
#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Path of the `SQLite` database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Category names seeded into a fresh database, each with no budget set.
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            default_categories: default_categories(),
        }
    }
}

/// Parses an [`AppConfig`] from a TOML file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref)
        .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path_ref, e)))?;
    let app_config: AppConfig = toml::from_str(&contents).map_err(|e| {
        Error::Config(format!(
            "Failed to parse TOML from config file {:?}: {}",
            path_ref, e
        ))
    })?;
    Ok(app_config)
}

/// Resolves the effective configuration for this run.
///
/// Reads the file named by `EXPENSE_TRACKER_CONFIG` (default `config.toml`)
/// when it exists, otherwise falls back to the built-in defaults so the
/// tracker starts on a fresh machine. `EXPENSE_TRACKER_DB` overrides the
/// database path either way.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config_path =
        env::var("EXPENSE_TRACKER_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let mut app_config = if Path::new(&config_path).exists() {
        load_config(&config_path)?
    } else {
        tracing::info!(
            "No config file at '{}'; using built-in defaults.",
            config_path
        );
        AppConfig::default()
    };
    if let Ok(db_path) = env::var("EXPENSE_TRACKER_DB") {
        app_config.database_path = db_path;
    }
    Ok(app_config)
}
