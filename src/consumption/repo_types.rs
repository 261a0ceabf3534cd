use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

use crate::nutrition::Macros;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ConsumptionLogEntry {
    pub id: i64,
    pub log_date: Date,
    pub item_id: Option<i64>,
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Validated consume request.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumption {
    pub item_id: i64,
    pub quantity: f64,
    pub note: Option<String>,
}

/// Row about to be appended; name, unit and macros are copied from the item
/// so later edits to it do not rewrite history.
#[derive(Debug, Clone)]
pub struct NewLogEntry<'a> {
    pub log_date: Date,
    pub item_id: i64,
    pub item_name: &'a str,
    pub quantity: f64,
    pub unit: &'a str,
    pub macros: Macros,
    pub note: Option<&'a str>,
}
