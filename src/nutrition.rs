use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The four tracked macros. Used for per-unit coefficients, absolute
/// amounts, targets and summary figures alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub fn scaled(&self, quantity: f64) -> Self {
        Self {
            calories: self.calories * quantity,
            protein: self.protein * quantity,
            carbs: self.carbs * quantity,
            fat: self.fat * quantity,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.calories.is_finite()
            && self.protein.is_finite()
            && self.carbs.is_finite()
            && self.fat.is_finite()
    }

    /// Per-macro `max(0, self - consumed)`.
    pub fn remaining_after(&self, consumed: &Macros) -> Self {
        Self {
            calories: (self.calories - consumed.calories).max(0.0),
            protein: (self.protein - consumed.protein).max(0.0),
            carbs: (self.carbs - consumed.carbs).max(0.0),
            fat: (self.fat - consumed.fat).max(0.0),
        }
    }
}

/// A request value that should be a real number. Clients send both JSON
/// numbers and numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub fn to_f64(&self, field: &str) -> Result<f64, AppError> {
        let value = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                AppError::Validation(format!("Field {field} must be a number"))
            })?,
        };
        if !value.is_finite() {
            return Err(AppError::Validation(format!(
                "Field {field} must be a finite number"
            )));
        }
        Ok(value)
    }

    pub fn non_negative(&self, field: &str) -> Result<f64, AppError> {
        let value = self.to_f64(field)?;
        if value < 0.0 {
            return Err(AppError::Validation(format!(
                "Field {field} must not be negative"
            )));
        }
        Ok(value)
    }
}

pub fn required<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T, AppError> {
    value.as_ref().ok_or_else(|| AppError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_multiplies_every_macro() {
        let per_unit = Macros {
            calories: 2.0,
            protein: 0.5,
            carbs: 0.25,
            fat: 0.1,
        };
        let total = per_unit.scaled(10.0);
        assert_eq!(total.calories, 20.0);
        assert_eq!(total.protein, 5.0);
        assert_eq!(total.carbs, 2.5);
        assert_eq!(total.fat, 1.0);
    }

    #[test]
    fn scaling_past_f64_range_is_not_finite() {
        let per_unit = Macros {
            calories: 1e308,
            ..Default::default()
        };
        assert!(per_unit.is_finite());
        assert!(!per_unit.scaled(10.0).is_finite());
    }

    #[test]
    fn remaining_clamps_each_macro_independently() {
        let targets = Macros {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fat: 70.0,
        };
        let consumed = Macros {
            calories: 2500.0,
            protein: 100.0,
            carbs: 200.0,
            fat: 0.0,
        };
        let remaining = targets.remaining_after(&consumed);
        assert_eq!(remaining.calories, 0.0);
        assert_eq!(remaining.protein, 50.0);
        assert_eq!(remaining.carbs, 0.0);
        assert_eq!(remaining.fat, 70.0);
    }

    #[test]
    fn numeric_accepts_numbers_and_numeric_strings() {
        let n: Numeric = serde_json::from_str("1.5").unwrap();
        assert_eq!(n.to_f64("quantity").unwrap(), 1.5);
        let s: Numeric = serde_json::from_str("\" 42 \"").unwrap();
        assert_eq!(s.to_f64("quantity").unwrap(), 42.0);
    }

    #[test]
    fn numeric_rejects_garbage_and_names_field() {
        let s: Numeric = serde_json::from_str("\"lots\"").unwrap();
        let err = s.to_f64("quantity").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn numeric_rejects_non_finite_and_negative() {
        let nan = Numeric::Text("NaN".into());
        assert!(nan.to_f64("fat_per_unit").is_err());
        let neg = Numeric::Number(-1.0);
        assert!(neg.to_f64("fat_per_unit").is_ok());
        assert!(neg.non_negative("fat_per_unit").is_err());
    }

    #[test]
    fn required_reports_missing_field() {
        let absent: Option<Numeric> = None;
        let err = required(&absent, "carbs_per_unit").unwrap_err();
        assert_eq!(err.to_string(), "Missing field: carbs_per_unit");
    }
}
