use sqlx::SqlitePool;
use tracing::{debug, info};

use super::repo;
use super::repo_types::{NewPantryItem, PantryItem, PantryItemPatch};
use crate::error::AppError;

pub async fn list_items(db: &SqlitePool) -> Result<Vec<PantryItem>, AppError> {
    Ok(repo::list(db).await?)
}

pub async fn get_item(db: &SqlitePool, id: i64) -> Result<PantryItem, AppError> {
    repo::find(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".into()))
}

pub async fn add_item(db: &SqlitePool, item: NewPantryItem) -> Result<i64, AppError> {
    let id = repo::insert(db, &item).await?;
    info!(item_id = id, name = %item.name, "pantry item added");
    Ok(id)
}

pub async fn update_item(db: &SqlitePool, id: i64, patch: PantryItemPatch) -> Result<(), AppError> {
    if patch.is_empty() {
        return Err(AppError::Validation("No fields to update".into()));
    }
    if repo::update(db, id, &patch).await? == 0 {
        return Err(AppError::NotFound("Item not found".into()));
    }
    info!(item_id = id, "pantry item updated");
    Ok(())
}

/// Idempotent: deleting an unknown id is not an error.
pub async fn delete_item(db: &SqlitePool, id: i64) -> Result<(), AppError> {
    let removed = repo::delete(db, id).await?;
    debug!(item_id = id, removed, "pantry item delete");
    Ok(())
}
