use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::nutrition::Macros;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PantryItem {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories_per_unit: f64,
    pub protein_per_unit: f64,
    pub carbs_per_unit: f64,
    pub fat_per_unit: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Validated input for a new pantry row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPantryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub per_unit: Macros,
}

/// Validated partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PantryItemPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub calories_per_unit: Option<f64>,
    pub protein_per_unit: Option<f64>,
    pub carbs_per_unit: Option<f64>,
    pub fat_per_unit: Option<f64>,
}

impl PantryItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
