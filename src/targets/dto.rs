use serde::Deserialize;

use crate::error::AppError;
use crate::nutrition::{required, Macros, Numeric};

#[derive(Debug, Default, Deserialize)]
pub struct SetTargetsRequest {
    pub calories: Option<Numeric>,
    pub protein: Option<Numeric>,
    pub carbs: Option<Numeric>,
    pub fat: Option<Numeric>,
}

impl TryFrom<SetTargetsRequest> for Macros {
    type Error = AppError;

    fn try_from(req: SetTargetsRequest) -> Result<Self, Self::Error> {
        let calories = required(&req.calories, "calories")?;
        let protein = required(&req.protein, "protein")?;
        let carbs = required(&req.carbs, "carbs")?;
        let fat = required(&req.fat, "fat")?;
        Ok(Macros {
            calories: calories.non_negative("calories")?,
            protein: protein.non_negative("protein")?,
            carbs: carbs.non_negative("carbs")?,
            fat: fat.non_negative("fat")?,
        })
    }
}
