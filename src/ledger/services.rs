use sqlx::SqlitePool;
use tracing::warn;

use crate::error::AppError;
use crate::{consumption, pantry};

/// Deletes every pantry item and every log entry. Targets are kept.
pub async fn reset_all(db: &SqlitePool) -> Result<(), AppError> {
    let mut tx = db.begin().await?;
    let items = pantry::repo::delete_all_tx(&mut tx).await?;
    let logs = consumption::repo::delete_all_tx(&mut tx).await?;
    tx.commit().await?;

    warn!(items, logs, "ledger reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumption::repo_types::Consumption;
    use crate::nutrition::Macros;
    use crate::pantry::repo_types::NewPantryItem;
    use crate::state::AppState;
    use crate::targets;
    use time::macros::date;

    #[tokio::test]
    async fn reset_clears_pantry_and_logs_but_keeps_targets() {
        let state = AppState::in_memory().await;
        let day = date!(2024 - 05 - 01);
        let goals = Macros {
            calories: 1800.0,
            protein: 120.0,
            carbs: 180.0,
            fat: 60.0,
        };
        targets::services::set_targets(&state.db, goals).await.unwrap();

        let id = pantry::services::add_item(
            &state.db,
            NewPantryItem {
                name: "Egg".into(),
                quantity: 12.0,
                unit: "piece".into(),
                per_unit: Macros {
                    calories: 70.0,
                    protein: 6.0,
                    carbs: 0.5,
                    fat: 5.0,
                },
            },
        )
        .await
        .unwrap();
        consumption::services::consume(
            &state.db,
            Consumption {
                item_id: id,
                quantity: 2.0,
                note: None,
            },
            day,
        )
        .await
        .unwrap();

        reset_all(&state.db).await.unwrap();

        assert!(pantry::services::list_items(&state.db).await.unwrap().is_empty());
        assert!(consumption::services::logs_for_day(&state.db, day)
            .await
            .unwrap()
            .is_empty());
        let kept = targets::services::get_targets(&state.db).await.unwrap();
        assert_eq!(kept.macros(), goals);
    }

    #[tokio::test]
    async fn reset_on_empty_ledger_succeeds() {
        let state = AppState::in_memory().await;
        reset_all(&state.db).await.unwrap();
    }
}
