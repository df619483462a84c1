use sqlx::migrate::MigrateError;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the books table and seeds the starter catalog.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
pub async fn setup_test_db() -> SqlitePool {
    // A single connection so every query sees the same in-memory database
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    migrate(&pool).await.unwrap();
    pool
}
