use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use super::repo_types::{NewPantryItem, PantryItem, PantryItemPatch};
use crate::nutrition::Macros;

/// All items, newest first. Ids are assigned in insertion order, so they
/// sort the same as `created_at` without depending on its text format.
pub async fn list(db: &SqlitePool) -> Result<Vec<PantryItem>, sqlx::Error> {
    sqlx::query_as::<_, PantryItem>(
        r#"
        SELECT id, name, quantity, unit, calories_per_unit, protein_per_unit,
               carbs_per_unit, fat_per_unit, created_at
          FROM pantry
         ORDER BY id DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find(db: &SqlitePool, id: i64) -> Result<Option<PantryItem>, sqlx::Error> {
    sqlx::query_as::<_, PantryItem>(
        r#"
        SELECT id, name, quantity, unit, calories_per_unit, protein_per_unit,
               carbs_per_unit, fat_per_unit, created_at
          FROM pantry
         WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert(db: &SqlitePool, item: &NewPantryItem) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO pantry (name, quantity, unit, calories_per_unit, protein_per_unit,
                            carbs_per_unit, fat_per_unit, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&item.name)
    .bind(item.quantity)
    .bind(&item.unit)
    .bind(item.per_unit.calories)
    .bind(item.per_unit.protein)
    .bind(item.per_unit.carbs)
    .bind(item.per_unit.fat)
    .bind(OffsetDateTime::now_utc())
    .execute(db)
    .await?
    .last_insert_rowid();
    Ok(id)
}

/// Applies only the fields present in `patch`. Returns the number of rows
/// touched (0 when the id is unknown).
pub async fn update(db: &SqlitePool, id: i64, patch: &PantryItemPatch) -> Result<u64, sqlx::Error> {
    let res = sqlx::query(
        r#"
        UPDATE pantry
           SET name              = COALESCE(?, name),
               quantity          = COALESCE(?, quantity),
               unit              = COALESCE(?, unit),
               calories_per_unit = COALESCE(?, calories_per_unit),
               protein_per_unit  = COALESCE(?, protein_per_unit),
               carbs_per_unit    = COALESCE(?, carbs_per_unit),
               fat_per_unit      = COALESCE(?, fat_per_unit)
         WHERE id = ?
        "#,
    )
    .bind(patch.name.as_deref())
    .bind(patch.quantity)
    .bind(patch.unit.as_deref())
    .bind(patch.calories_per_unit)
    .bind(patch.protein_per_unit)
    .bind(patch.carbs_per_unit)
    .bind(patch.fat_per_unit)
    .bind(id)
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("DELETE FROM pantry WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

/// What consumption needs to know about an item after its stock was taken.
#[derive(Debug, sqlx::FromRow)]
pub struct DrawnStock {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub calories_per_unit: f64,
    pub protein_per_unit: f64,
    pub carbs_per_unit: f64,
    pub fat_per_unit: f64,
}

impl DrawnStock {
    pub fn per_unit(&self) -> Macros {
        Macros {
            calories: self.calories_per_unit,
            protein: self.protein_per_unit,
            carbs: self.carbs_per_unit,
            fat: self.fat_per_unit,
        }
    }
}

/// Takes `amount` out of stock, flooring at zero, in a single statement so
/// the read and the write cannot interleave with another consumer. Returns
/// `None` when the item does not exist.
pub async fn draw_stock_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
    amount: f64,
) -> Result<Option<DrawnStock>, sqlx::Error> {
    sqlx::query_as::<_, DrawnStock>(
        r#"
        UPDATE pantry
           SET quantity = MAX(0.0, quantity - ?)
         WHERE id = ?
        RETURNING id, name, unit, quantity, calories_per_unit, protein_per_unit,
                  carbs_per_unit, fat_per_unit
        "#,
    )
    .bind(amount)
    .bind(id)
    .fetch_optional(&mut **tx)
    .await
}

pub async fn delete_all_tx(tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("DELETE FROM pantry").execute(&mut **tx).await?;
    Ok(res.rows_affected())
}
