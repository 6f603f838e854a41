use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use super::entities::SCHEMA_REGISTRY;
use crate::config::DatabaseConfig;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the pool and brings the league tables in line with the entities.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg))
        .await
        .context("failed to connect to the league database")?;
    sync_schema(&db).await?;
    Ok(db)
}

fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);
    options
}

async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    tracing::info!(registry = SCHEMA_REGISTRY, "syncing league schema");
    db.get_schema_registry(SCHEMA_REGISTRY)
        .sync(db)
        .await
        .context("failed to sync users, tournaments and cash games tables")
}
