use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::{AppConfig, DataBackend};
use api::gql::build_schema;
use api::state::AppState;
use infra::{DataStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn DataStore> = match config.backend {
        DataBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;
            let pool = infra::db::connect(database_url, config.database_max_connections).await?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                config.database_max_connections
            );

            if config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                infra::db::run_migrations(&pool).await?;
                tracing::info!("Database migrations completed successfully");
            }

            Arc::new(PgStore::new(pool))
        }
        DataBackend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(store);
    let schema = build_schema(&config.graphql);
    let app = build_router(state, schema, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
