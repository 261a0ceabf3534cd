use sqlx::SqlitePool;
use time::Date;
use tracing::info;

use super::repo;
use super::repo_types::{DailySummary, TargetRecord};
use crate::consumption;
use crate::error::AppError;
use crate::nutrition::Macros;

pub async fn get_targets(db: &SqlitePool) -> Result<TargetRecord, AppError> {
    Ok(repo::get(db).await?)
}

pub async fn set_targets(db: &SqlitePool, targets: Macros) -> Result<(), AppError> {
    if repo::set(db, &targets).await? == 0 {
        // the row is seeded at startup; missing means the schema was tampered with
        return Err(AppError::Storage(sqlx::Error::RowNotFound));
    }
    info!(
        calories = targets.calories,
        protein = targets.protein,
        carbs = targets.carbs,
        fat = targets.fat,
        "targets updated"
    );
    Ok(())
}

/// Targets versus what was logged on `day`.
pub async fn daily_summary(db: &SqlitePool, day: Date) -> Result<DailySummary, AppError> {
    let targets = repo::get(db).await?.macros();
    let consumed = consumption::repo::totals_by_date(db, day).await?;
    Ok(DailySummary::new(day, targets, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumption::repo_types::Consumption;
    use crate::consumption::services as consumption_services;
    use crate::pantry::repo_types::NewPantryItem;
    use crate::pantry::services as pantry_services;
    use crate::state::AppState;
    use time::macros::date;

    const DAY: Date = date!(2024 - 05 - 01);

    fn daily_targets() -> Macros {
        Macros {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fat: 70.0,
        }
    }

    async fn add_item(db: &SqlitePool, calories: f64) -> i64 {
        pantry_services::add_item(
            db,
            NewPantryItem {
                name: "Bar".into(),
                quantity: 10.0,
                unit: "piece".into(),
                per_unit: Macros {
                    calories,
                    protein: 10.0,
                    carbs: 30.0,
                    fat: 5.0,
                },
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn fresh_targets_are_zero() {
        let state = AppState::in_memory().await;
        let t = get_targets(&state.db).await.unwrap();
        assert_eq!(t.macros(), Macros::default());
    }

    #[tokio::test]
    async fn set_targets_overwrites_and_bumps_timestamp() {
        let state = AppState::in_memory().await;
        let before = get_targets(&state.db).await.unwrap();

        set_targets(&state.db, daily_targets()).await.unwrap();

        let after = get_targets(&state.db).await.unwrap();
        assert_eq!(after.macros(), daily_targets());
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn empty_day_summary_has_zero_consumed_and_full_remaining() {
        let state = AppState::in_memory().await;
        set_targets(&state.db, daily_targets()).await.unwrap();

        let summary = daily_summary(&state.db, DAY).await.unwrap();
        assert_eq!(summary.date, DAY);
        assert_eq!(summary.targets, daily_targets());
        assert_eq!(summary.consumed, Macros::default());
        assert_eq!(summary.remaining, daily_targets());
    }

    #[tokio::test]
    async fn summary_sums_the_day_and_never_goes_negative() {
        let state = AppState::in_memory().await;
        set_targets(&state.db, daily_targets()).await.unwrap();
        let id = add_item(&state.db, 500.0).await;

        for _ in 0..5 {
            let c = Consumption {
                item_id: id,
                quantity: 1.0,
                note: None,
            };
            consumption_services::consume(&state.db, c, DAY).await.unwrap();
        }
        // a different day must not count
        let c = Consumption {
            item_id: id,
            quantity: 1.0,
            note: None,
        };
        consumption_services::consume(&state.db, c, date!(2024 - 04 - 30))
            .await
            .unwrap();

        let summary = daily_summary(&state.db, DAY).await.unwrap();
        assert_eq!(summary.consumed.calories, 2500.0);
        assert_eq!(summary.consumed.protein, 50.0);
        assert_eq!(summary.consumed.carbs, 150.0);
        assert_eq!(summary.consumed.fat, 25.0);
        assert_eq!(summary.remaining.calories, 0.0);
        assert_eq!(summary.remaining.protein, 100.0);
        assert_eq!(summary.remaining.carbs, 50.0);
        assert_eq!(summary.remaining.fat, 45.0);
    }
}
