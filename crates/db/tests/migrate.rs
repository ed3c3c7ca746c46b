use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

async fn migrated_pool(dir: &TempDir) -> anyhow::Result<SqlitePool> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    liftbook_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[tokio::test]
async fn test_migrations_create_every_table() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = migrated_pool(&dir).await?;

    let tables: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&pool)
            .await?;
    let tables = tables.into_iter().map(|(name,)| name).collect::<Vec<_>>();

    for expected in ["exercise", "log", "plan", "plan_day", "user", "week"] {
        assert!(
            tables.iter().any(|t| t == expected),
            "missing table {expected}, got {tables:?}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = migrated_pool(&dir).await?;

    let mut conn = pool.acquire().await?;
    liftbook_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_log_key_is_unique() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = migrated_pool(&dir).await?;

    sqlx::query("INSERT INTO user (id, email, password_hash, created_at) VALUES ('u1', 'a@b.c', 'x', 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO plan (id, user_id, name, days_per_week, created_at) VALUES ('p1', 'u1', 'PPL', 1, 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO plan_day (id, plan_id, day_order, headline) VALUES ('d1', 'p1', 1, 'Push')")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO exercise (id, day_id, name, sets, reps, position, created_at) VALUES ('e1', 'd1', 'Bench', 5, '5', 1, 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO week (id, plan_id, start_date, is_locked, created_at) VALUES ('w1', 'p1', 0, 0, 0)")
        .execute(&pool)
        .await?;

    let insert = "INSERT INTO log (week_id, exercise_id, day_number, weight_lifted, sets, reps, notes, difficulty, updated_at) VALUES ('w1', 'e1', 1, '100', 5, '5', '', NULL, 0)";
    sqlx::query(insert).execute(&pool).await?;
    let duplicate = sqlx::query(insert).execute(&pool).await;
    assert!(duplicate.is_err());

    Ok(())
}
