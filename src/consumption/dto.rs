use serde::Deserialize;

use crate::error::AppError;
use crate::nutrition::{required, Numeric};

use super::repo_types::Consumption;

#[derive(Debug, Default, Deserialize)]
pub struct ConsumeRequest {
    pub item_id: Option<Numeric>,
    pub quantity: Option<Numeric>,
    pub note: Option<String>,
}

impl TryFrom<ConsumeRequest> for Consumption {
    type Error = AppError;

    fn try_from(req: ConsumeRequest) -> Result<Self, Self::Error> {
        let item_id = required(&req.item_id, "item_id")?.to_f64("item_id")?;
        let quantity = required(&req.quantity, "quantity")?.to_f64("quantity")?;

        if item_id.fract() != 0.0 || item_id < i64::MIN as f64 || item_id >= i64::MAX as f64 {
            return Err(AppError::Validation("Field item_id must be an integer".into()));
        }
        if quantity <= 0.0 {
            return Err(AppError::Validation("Quantity must be > 0".into()));
        }

        let note = req
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Consumption {
            item_id: item_id as i64,
            quantity,
            note,
        })
    }
}
