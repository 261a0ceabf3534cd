use sqlx::SqlitePool;
use time::Date;
use tracing::info;

use super::repo;
use super::repo_types::{Consumption, ConsumptionLogEntry, NewLogEntry};
use crate::error::AppError;
use crate::pantry;

/// Records that `c.quantity` of an item was eaten on `day`.
///
/// Stock is floored at zero rather than rejected when the pantry count is
/// stale. The stock change and the log row commit together; any error
/// before the commit drops the transaction and rolls both back.
pub async fn consume(db: &SqlitePool, c: Consumption, day: Date) -> Result<i64, AppError> {
    if c.quantity <= 0.0 {
        return Err(AppError::Validation("Quantity must be > 0".into()));
    }

    let mut tx = db.begin().await?;

    let Some(stock) = pantry::repo::draw_stock_tx(&mut tx, c.item_id, c.quantity).await? else {
        return Err(AppError::NotFound("Item not found".into()));
    };

    let macros = stock.per_unit().scaled(c.quantity);
    if !macros.is_finite() {
        // returning drops `tx`, which puts the stock back
        return Err(AppError::Validation("Quantity too large".into()));
    }
    let log_id = repo::insert_log_tx(
        &mut tx,
        &NewLogEntry {
            log_date: day,
            item_id: stock.id,
            item_name: &stock.name,
            quantity: c.quantity,
            unit: &stock.unit,
            macros,
            note: c.note.as_deref(),
        },
    )
    .await?;

    tx.commit().await?;

    info!(
        item_id = stock.id,
        log_id,
        consumed = c.quantity,
        remaining_stock = stock.quantity,
        calories = macros.calories,
        "consumption logged"
    );
    Ok(log_id)
}

pub async fn logs_for_day(db: &SqlitePool, day: Date) -> Result<Vec<ConsumptionLogEntry>, AppError> {
    Ok(repo::list_by_date(db, day).await?)
}
