use sqlx::{SqlitePool, migrate::MigrateDatabase};
use sqlx_migrator::{Migrate, Plan};

use crate::Config;

/// Apply every pending migration on the given pool.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    liftbook_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}

#[tracing::instrument(skip_all)]
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("running database migrations");

    let pool = crate::db::create_write_pool(&config.database.url).await?;
    run_migrations(&pool).await?;
    pool.close().await;

    tracing::info!("migrations completed");

    Ok(())
}

/// Drop the database when it exists and migrate a fresh one.
#[tracing::instrument(skip_all)]
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!(url = %config.database.url, "dropping existing database");
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("database does not exist, nothing to drop");
    }

    migrate(config).await
}
