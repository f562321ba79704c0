use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use tracing::{info, instrument};

use crate::seed::{DbSeedStore, SeedStore};

/// Creates the helpdesk tables that are missing. Existing rows are kept.
#[instrument(skip_all)]
pub async fn init_database(database_url: &str) -> Result<()> {
    let store = DbSeedStore::connect(database_url).await?;

    Migrator::up(store.connection(), None)
        .await
        .context("applying helpdesk schema migrations")?;
    info!("helpdesk schema is up to date");

    store.close().await?;
    Ok(())
}
