use std::sync::Arc;

use campaign_tracker::{
    app_state::AppState,
    get_sqlite_pool, migrate,
    services::data_stores::{SqliteProjectStore, SqliteUserStore},
    utils::{
        constants::{APP_ADDRESS, CLIENT_BUILD_DIR, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};
use color_eyre::eyre::{eyre, Result, WrapErr};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let pool = get_sqlite_pool(&DATABASE_URL)
        .await
        .wrap_err("Failed to open SQLite database")?;
    migrate(&pool)
        .await
        .wrap_err("Failed to create database tables")?;
    tracing::info!("connected to SQLite database");

    let user_store = Arc::new(RwLock::new(SqliteUserStore::new(pool.clone())));
    let project_store =
        Arc::new(RwLock::new(SqliteProjectStore::new(pool.clone())));
    let app_state = AppState::new(user_store, project_store);

    let app = Application::build(
        app_state,
        &APP_ADDRESS,
        CLIENT_BUILD_DIR.as_deref(),
    )
    .await
    .map_err(|e| eyre!("Failed to build app: {e}"))?;

    let result = app.run().await;

    pool.close().await;
    tracing::info!("closed the database connection");

    result.wrap_err("Server stopped unexpectedly")
}
