// ABOUTME: Daily intake snapshots and lenient sanitisation of caller-supplied nutrient totals
// ABOUTME: Bad entries degrade to zero with a recorded issue instead of failing the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use nutrigap_core::constants::reference_diet::MAX_TARGET_CALORIES;
use nutrigap_core::errors::AppError;
use nutrigap_core::models::NutrientKey;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// Problems found in caller-supplied intake data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// `consumedNutrients` was not a JSON object
    #[error("consumedNutrients must be an object")]
    NotAnObject,

    /// Key is not a tracked nutrient
    #[error("Unknown nutrient key '{0}' ignored")]
    UnknownNutrient(String),

    /// Value is not a number
    #[error("Value for {0} is not a number; treated as 0")]
    NonNumeric(NutrientKey),

    /// Value is negative
    #[error("Value {value} for {nutrient} is negative; treated as 0")]
    Negative {
        /// Nutrient concerned
        nutrient: NutrientKey,
        /// Value supplied
        value: f64,
    },

    /// Value is NaN or infinite
    #[error("Value for {0} is not finite; treated as 0")]
    NonFinite(NutrientKey),

    /// `targetCalories` is not a positive finite number within range
    #[error("targetCalories must be a positive number no greater than {max}, got {value}")]
    InvalidTargetCalories {
        /// Value supplied
        value: f64,
        /// Accepted maximum
        max: f64,
    },
}

impl From<InputError> for AppError {
    fn from(error: InputError) -> Self {
        Self::invalid_input(error.to_string())
    }
}

/// Aggregated nutrient intake for one day
///
/// Amounts are always finite and non-negative. Absent nutrients read as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyIntake {
    amounts: BTreeMap<NutrientKey, f64>,
}

impl DailyIntake {
    /// Empty intake (everything consumed = 0)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an intake from typed amounts, sanitising each value
    ///
    /// Returns the intake together with every issue that was corrected.
    pub fn from_amounts(
        amounts: impl IntoIterator<Item = (NutrientKey, f64)>,
    ) -> (Self, Vec<InputError>) {
        let mut intake = Self::new();
        let mut issues = Vec::new();
        for (nutrient, amount) in amounts {
            if let Err(issue) = intake.record(nutrient, amount) {
                issues.push(issue);
            }
        }
        (intake, issues)
    }

    /// Build an intake from a loosely-typed JSON object
    ///
    /// Unknown keys are ignored, non-numeric values are treated as zero, and
    /// a non-object value yields an empty intake. Each issue is logged at
    /// `warn` and returned so callers can count them.
    #[must_use]
    pub fn from_lenient(value: &Value) -> (Self, Vec<InputError>) {
        let mut intake = Self::new();
        let mut issues = Vec::new();

        match value {
            Value::Null => {}
            Value::Object(entries) => {
                for (key, raw) in entries {
                    let Ok(nutrient) = key.parse::<NutrientKey>() else {
                        issues.push(InputError::UnknownNutrient(key.clone()));
                        continue;
                    };
                    let outcome = raw
                        .as_f64()
                        .ok_or(InputError::NonNumeric(nutrient))
                        .and_then(|amount| intake.record(nutrient, amount));
                    if let Err(issue) = outcome {
                        intake.amounts.insert(nutrient, 0.0);
                        issues.push(issue);
                    }
                }
            }
            _ => issues.push(InputError::NotAnObject),
        }

        for issue in &issues {
            warn!(issue = %issue, "Lenient intake correction");
        }
        (intake, issues)
    }

    /// Store an amount, replacing invalid values with zero
    ///
    /// # Errors
    ///
    /// Returns the issue when the amount had to be corrected; zero is
    /// stored in that case.
    pub fn record(&mut self, nutrient: NutrientKey, amount: f64) -> Result<(), InputError> {
        match sanitize_amount(nutrient, amount) {
            Ok(amount) => {
                self.amounts.insert(nutrient, amount);
                Ok(())
            }
            Err(issue) => {
                self.amounts.insert(nutrient, 0.0);
                Err(issue)
            }
        }
    }

    /// Amount consumed, 0 when absent
    #[must_use]
    pub fn consumed(&self, nutrient: NutrientKey) -> f64 {
        self.amounts.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Whether the nutrient was present in the snapshot
    #[must_use]
    pub fn contains(&self, nutrient: NutrientKey) -> bool {
        self.amounts.contains_key(&nutrient)
    }

    /// Recorded amounts in key order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        self.amounts.iter().map(|(key, amount)| (*key, *amount))
    }

    /// Number of recorded nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

fn sanitize_amount(nutrient: NutrientKey, amount: f64) -> Result<f64, InputError> {
    if !amount.is_finite() {
        Err(InputError::NonFinite(nutrient))
    } else if amount < 0.0 {
        Err(InputError::Negative {
            nutrient,
            value: amount,
        })
    } else {
        Ok(amount)
    }
}

/// Validate an optional personalized calorie target
///
/// # Errors
///
/// Returns [`InputError::InvalidTargetCalories`] when the value is not a
/// positive finite number or exceeds the accepted maximum
pub fn validate_target_calories(target: Option<f64>) -> Result<Option<f64>, InputError> {
    match target {
        Some(value) if !value.is_finite() || value <= 0.0 || value > MAX_TARGET_CALORIES => {
            Err(InputError::InvalidTargetCalories {
                value,
                max: MAX_TARGET_CALORIES,
            })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_nutrient_reads_zero() {
        let intake = DailyIntake::new();
        assert!(intake.consumed(NutrientKey::Iron).abs() < f64::EPSILON);
        assert!(!intake.contains(NutrientKey::Iron));
    }

    #[test]
    fn test_lenient_parsing_corrects_bad_entries() {
        let raw = json!({
            "protein": 40,
            "iron": "lots",
            "zinc": -3.5,
            "vitaminZ": 12,
            "calcium": 650.5
        });
        let (intake, issues) = DailyIntake::from_lenient(&raw);

        assert!((intake.consumed(NutrientKey::Protein) - 40.0).abs() < f64::EPSILON);
        assert!((intake.consumed(NutrientKey::Calcium) - 650.5).abs() < f64::EPSILON);
        assert!(intake.consumed(NutrientKey::Iron).abs() < f64::EPSILON);
        assert!(intake.consumed(NutrientKey::Zinc).abs() < f64::EPSILON);
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&InputError::NonNumeric(NutrientKey::Iron)));
        assert!(issues.contains(&InputError::UnknownNutrient("vitaminZ".into())));
    }

    #[test]
    fn test_non_object_yields_empty_intake() {
        let (intake, issues) = DailyIntake::from_lenient(&json!([1, 2, 3]));
        assert!(intake.is_empty());
        assert_eq!(issues, vec![InputError::NotAnObject]);

        let (intake, issues) = DailyIntake::from_lenient(&Value::Null);
        assert!(intake.is_empty());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_non_finite_amount_recorded_as_zero() {
        let (intake, issues) =
            DailyIntake::from_amounts([(NutrientKey::Fiber, f64::NAN), (NutrientKey::Fat, 70.0)]);
        assert!(intake.consumed(NutrientKey::Fiber).abs() < f64::EPSILON);
        assert!(intake.contains(NutrientKey::Fiber));
        assert_eq!(issues, vec![InputError::NonFinite(NutrientKey::Fiber)]);
    }

    #[test]
    fn test_target_calories_validation() {
        assert_eq!(validate_target_calories(None).unwrap(), None);
        assert_eq!(validate_target_calories(Some(1800.0)).unwrap(), Some(1800.0));
        assert!(validate_target_calories(Some(0.0)).is_err());
        assert!(validate_target_calories(Some(-100.0)).is_err());
        assert!(validate_target_calories(Some(f64::INFINITY)).is_err());
        assert!(validate_target_calories(Some(50_000.0)).is_err());
    }
}
