use clap::Parser;
use dotenvy::dotenv;
use expense_tracker::cli::{self, Cli};
use expense_tracker::errors::Result;
use expense_tracker::{config, db};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    let args = Cli::parse();

    // 3. Resolve configuration (config.toml + environment overrides)
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database
    let db_pool = db::init_db(&app_config.database_path)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Seed default categories (best-effort, idempotent)
    db::seed_default_categories(&db_pool, &app_config.default_categories)
        .await
        .inspect_err(|e| error!("Failed to seed default categories: {}", e))?;

    // 6. Run the requested command
    cli::run_command(&db_pool, args.command).await
}
