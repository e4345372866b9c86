use anyhow::{Context, Result};
use dotenv::dotenv;
use shopfront::{
    config::{Config, ConnectionManager, ConnectionPool},
    handler::AppRouter,
    repository::ProductSeeder,
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("shopfront", enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting shopfront initialization...");

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    ProductSeeder::new(pool.clone())
        .seed_if_empty()
        .await
        .context("Failed to seed sample products")?;

    let state = AppState::new(pool, &config.session_secret)
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ shopfront shutdown complete.");

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
