use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub type Db = PgPool;

/// Open a Postgres pool with the limits the API server runs with.
pub async fn connect(database_url: &str, max_connections: u32) -> sqlx::Result<Db> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Some(Duration::from_secs(600))) // 10 minutes
        .max_lifetime(Some(Duration::from_secs(1800))) // 30 minutes
        .connect(database_url)
        .await
}

/// Apply the embedded migrations (schema + member type seed).
pub async fn run_migrations(pool: &Db) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
