use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

use crate::nutrition::Macros;

/// The singleton targets row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TargetRecord {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl TargetRecord {
    pub fn macros(&self) -> Macros {
        Macros {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: Date,
    pub targets: Macros,
    pub consumed: Macros,
    pub remaining: Macros,
}

impl DailySummary {
    pub fn new(date: Date, targets: Macros, consumed: Macros) -> Self {
        Self {
            date,
            targets,
            consumed,
            remaining: targets.remaining_after(&consumed),
        }
    }
}
