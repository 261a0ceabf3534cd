use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use time::OffsetDateTime;

use crate::config::AppConfig;

pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("parse database url {}", config.database_url))?
        .create_if_missing(true);
    let db = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Applies the embedded migrations and makes sure the singleton targets row
/// exists.
pub async fn prepare(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("run migrations")?;
    ensure_targets_row(db).await.context("seed targets row")?;
    Ok(())
}

async fn ensure_targets_row(db: &SqlitePool) -> Result<(), sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT OR IGNORE INTO macros_targets (id, calories, protein, carbs, fat, updated_at)
        VALUES (1, 0, 0, 0, 0, ?)
        "#,
    )
    .bind(OffsetDateTime::now_utc())
    .execute(db)
    .await?
    .rows_affected();
    if inserted > 0 {
        tracing::info!("initialized macro targets");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepare_is_idempotent_and_keeps_one_targets_row() {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        prepare(&db).await.unwrap();
        prepare(&db).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM macros_targets")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn second_targets_row_is_rejected() {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        prepare(&db).await.unwrap();

        let res = sqlx::query(
            "INSERT INTO macros_targets (id, calories, protein, carbs, fat, updated_at) VALUES (2, 0, 0, 0, 0, 'x')",
        )
        .execute(&db)
        .await;
        assert!(res.is_err());
    }
}
