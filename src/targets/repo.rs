use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::repo_types::TargetRecord;
use crate::nutrition::Macros;

pub async fn get(db: &SqlitePool) -> Result<TargetRecord, sqlx::Error> {
    sqlx::query_as::<_, TargetRecord>(
        r#"
        SELECT calories, protein, carbs, fat, updated_at
          FROM macros_targets
         WHERE id = 1
        "#,
    )
    .fetch_one(db)
    .await
}

/// Overwrites all four targets. Returns the number of rows touched, which is
/// 0 only if the singleton was never seeded.
pub async fn set(db: &SqlitePool, targets: &Macros) -> Result<u64, sqlx::Error> {
    let res = sqlx::query(
        r#"
        UPDATE macros_targets
           SET calories = ?, protein = ?, carbs = ?, fat = ?, updated_at = ?
         WHERE id = 1
        "#,
    )
    .bind(targets.calories)
    .bind(targets.protein)
    .bind(targets.carbs)
    .bind(targets.fat)
    .bind(OffsetDateTime::now_utc())
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}
