mod hashmap_project_store;
mod hashmap_user_store;
mod sqlite_project_store;
mod sqlite_user_store;

pub use hashmap_project_store::*;
pub use hashmap_user_store::*;
pub use sqlite_project_store::*;
pub use sqlite_user_store::*;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite database");

    crate::migrate(&pool)
        .await
        .expect("Failed to migrate the database");

    pool
}
