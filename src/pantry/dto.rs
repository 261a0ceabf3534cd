use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::nutrition::{required, Macros, Numeric};

use super::repo_types::{NewPantryItem, PantryItemPatch};

/// Body of `POST /api/pantry`. Every field is required; they are optional
/// here so a missing one can be reported by name.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePantryItemRequest {
    pub name: Option<String>,
    pub quantity: Option<Numeric>,
    pub unit: Option<String>,
    pub calories_per_unit: Option<Numeric>,
    pub protein_per_unit: Option<Numeric>,
    pub carbs_per_unit: Option<Numeric>,
    pub fat_per_unit: Option<Numeric>,
}

/// Body of `PUT /api/pantry/:id`. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePantryItemRequest {
    pub name: Option<String>,
    pub quantity: Option<Numeric>,
    pub unit: Option<String>,
    pub calories_per_unit: Option<Numeric>,
    pub protein_per_unit: Option<Numeric>,
    pub carbs_per_unit: Option<Numeric>,
    pub fat_per_unit: Option<Numeric>,
}

#[derive(Debug, Serialize)]
pub struct CreatedPantryItemResponse {
    pub id: i64,
}

fn clean_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Field name must not be empty".into()));
    }
    Ok(name.to_string())
}

impl TryFrom<CreatePantryItemRequest> for NewPantryItem {
    type Error = AppError;

    fn try_from(req: CreatePantryItemRequest) -> Result<Self, Self::Error> {
        let name = required(&req.name, "name")?;
        let quantity = required(&req.quantity, "quantity")?;
        let unit = required(&req.unit, "unit")?;
        let calories = required(&req.calories_per_unit, "calories_per_unit")?;
        let protein = required(&req.protein_per_unit, "protein_per_unit")?;
        let carbs = required(&req.carbs_per_unit, "carbs_per_unit")?;
        let fat = required(&req.fat_per_unit, "fat_per_unit")?;

        Ok(NewPantryItem {
            name: clean_name(name)?,
            quantity: quantity.non_negative("quantity")?,
            unit: unit.trim().to_string(),
            per_unit: Macros {
                calories: calories.non_negative("calories_per_unit")?,
                protein: protein.non_negative("protein_per_unit")?,
                carbs: carbs.non_negative("carbs_per_unit")?,
                fat: fat.non_negative("fat_per_unit")?,
            },
        })
    }
}

impl TryFrom<UpdatePantryItemRequest> for PantryItemPatch {
    type Error = AppError;

    fn try_from(req: UpdatePantryItemRequest) -> Result<Self, Self::Error> {
        let coerce = |value: &Option<Numeric>, field: &str| {
            value.as_ref().map(|v| v.non_negative(field)).transpose()
        };

        let patch = PantryItemPatch {
            name: req.name.as_deref().map(clean_name).transpose()?,
            quantity: coerce(&req.quantity, "quantity")?,
            unit: req.unit.as_deref().map(|u| u.trim().to_string()),
            calories_per_unit: coerce(&req.calories_per_unit, "calories_per_unit")?,
            protein_per_unit: coerce(&req.protein_per_unit, "protein_per_unit")?,
            carbs_per_unit: coerce(&req.carbs_per_unit, "carbs_per_unit")?,
            fat_per_unit: coerce(&req.fat_per_unit, "fat_per_unit")?,
        };
        if patch.is_empty() {
            return Err(AppError::Validation("No fields to update".into()));
        }
        Ok(patch)
    }
}
