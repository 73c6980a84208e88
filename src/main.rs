//! Simple Order Manager server
//!
//! Configuration is read from the YAML file named by `ORDER_MANAGER_CONFIG`
//! (optional) with `BIND_ADDR` and `DATABASE_URL` overrides.

use anyhow::Result;
use simple_order_manager::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let builder = with_configured_store(ServerBuilder::new(), &config).await?;
    builder.serve(&config.server.bind).await
}

#[cfg(feature = "postgres")]
async fn with_configured_store(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    use simple_order_manager::storage::{PostgresOrderStore, postgres::ensure_schema};
    use sqlx::postgres::PgPoolOptions;

    let Some(url) = config.database.url.as_deref() else {
        tracing::info!("No database configured, using in-memory order store");
        return Ok(builder.with_store(InMemoryOrderStore::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(url)
        .await?;
    ensure_schema(&pool).await?;

    tracing::info!("Using PostgreSQL order store");
    Ok(builder.with_store(PostgresOrderStore::new(pool)))
}

#[cfg(not(feature = "postgres"))]
async fn with_configured_store(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    if config.database.url.is_some() {
        tracing::warn!(
            "database.url is set but the `postgres` feature is disabled, using in-memory order store"
        );
    } else {
        tracing::info!("No database configured, using in-memory order store");
    }
    Ok(builder.with_store(InMemoryOrderStore::new()))
}
