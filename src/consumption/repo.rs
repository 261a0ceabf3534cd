use sqlx::{Sqlite, SqlitePool, Transaction};
use time::{Date, OffsetDateTime};

use super::repo_types::{ConsumptionLogEntry, NewLogEntry};
use crate::nutrition::Macros;

pub async fn insert_log_tx(
    tx: &mut Transaction<'_, Sqlite>,
    entry: &NewLogEntry<'_>,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO consumption_log
            (log_date, item_id, item_name, quantity, unit, calories, protein, carbs, fat, note, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.log_date)
    .bind(entry.item_id)
    .bind(entry.item_name)
    .bind(entry.quantity)
    .bind(entry.unit)
    .bind(entry.macros.calories)
    .bind(entry.macros.protein)
    .bind(entry.macros.carbs)
    .bind(entry.macros.fat)
    .bind(entry.note)
    .bind(OffsetDateTime::now_utc())
    .execute(&mut **tx)
    .await?
    .last_insert_rowid();
    Ok(id)
}

/// Entries logged on `day`, newest first.
pub async fn list_by_date(db: &SqlitePool, day: Date) -> Result<Vec<ConsumptionLogEntry>, sqlx::Error> {
    sqlx::query_as::<_, ConsumptionLogEntry>(
        r#"
        SELECT id, log_date, item_id, item_name, quantity, unit,
               calories, protein, carbs, fat, note, created_at
          FROM consumption_log
         WHERE log_date = ?
         ORDER BY id DESC
        "#,
    )
    .bind(day)
    .fetch_all(db)
    .await
}

/// Column sums for `day`; an empty day sums to zero.
pub async fn totals_by_date(db: &SqlitePool, day: Date) -> Result<Macros, sqlx::Error> {
    sqlx::query_as::<_, Macros>(
        r#"
        SELECT COALESCE(SUM(calories), 0.0) AS calories,
               COALESCE(SUM(protein), 0.0)  AS protein,
               COALESCE(SUM(carbs), 0.0)    AS carbs,
               COALESCE(SUM(fat), 0.0)      AS fat
          FROM consumption_log
         WHERE log_date = ?
        "#,
    )
    .bind(day)
    .fetch_one(db)
    .await
}

pub async fn delete_all_tx(tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("DELETE FROM consumption_log")
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}
