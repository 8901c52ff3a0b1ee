// ABOUTME: Nutrient profile store with default daily values and calorie-based personalization
// ABOUTME: RecommendedValues tables are built fresh per request and validated before analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrient Profile Store
//!
//! Default recommended daily values are the FDA adult daily values for a
//! 2000 kcal reference diet, with the 1.6 g adequate intake for omega-3.
//! A deployment can replace the whole table with a JSON file of the form
//! `{"referenceCalories": 2000, "values": {"protein": 50, ...}}`.

use crate::config::ConfigError;
use crate::intake::{validate_target_calories, InputError};
use nutrigap_core::constants::reference_diet::REFERENCE_CALORIES;
use nutrigap_core::models::{NutrientCategory, NutrientKey, NutrientUnit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Recommended daily amount per nutrient
///
/// The analyzer treats this table as opaque input. Values are checked for
/// positivity when analysed, not when built, so a bad table is always
/// reported as a configuration fault by the analysis itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendedValues {
    values: BTreeMap<NutrientKey, f64>,
}

impl RecommendedValues {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from wire keys
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownNutrient`] for any key that is not tracked
    pub fn from_raw(raw: &BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        raw.iter()
            .map(|(key, value)| {
                key.parse::<NutrientKey>()
                    .map(|nutrient| (nutrient, *value))
                    .map_err(|_| ConfigError::UnknownNutrient(key.clone()))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(|values| Self { values })
    }

    /// Set the target for a nutrient
    pub fn insert(&mut self, nutrient: NutrientKey, value: f64) {
        self.values.insert(nutrient, value);
    }

    /// Target for a nutrient
    #[must_use]
    pub fn get(&self, nutrient: NutrientKey) -> Option<f64> {
        self.values.get(&nutrient).copied()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        self.values.iter().map(|(key, value)| (*key, *value))
    }

    /// Number of tracked nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table tracks nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that every value is strictly positive and finite
    ///
    /// # Errors
    ///
    /// Returns the first offending nutrient in key order
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            Some((nutrient, value)) => {
                Err(ConfigError::NonPositiveRecommendation { nutrient, value })
            }
            None => Ok(()),
        }
    }

    /// Check that every tracked nutrient has a value
    ///
    /// # Errors
    ///
    /// Returns the first missing nutrient in dashboard order
    pub fn require_all(&self) -> Result<(), ConfigError> {
        NutrientKey::ALL
            .into_iter()
            .find(|key| !self.values.contains_key(key))
            .map_or(Ok(()), |key| Err(ConfigError::MissingRecommendation(key)))
    }
}

impl FromIterator<(NutrientKey, f64)> for RecommendedValues {
    fn from_iter<I: IntoIterator<Item = (NutrientKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One row of the nutrient catalog exposed to presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    /// Wire key
    pub key: NutrientKey,
    /// Human-readable label
    pub display_name: String,
    /// Canonical unit
    pub unit: NutrientUnit,
    /// Dashboard grouping
    pub category: NutrientCategory,
    /// Default recommended daily amount
    pub default_recommended: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ProfileFile {
    #[serde(default = "default_reference_calories")]
    reference_calories: f64,
    values: BTreeMap<String, f64>,
}

const fn default_reference_calories() -> f64 {
    REFERENCE_CALORIES
}

const BUILTIN_DAILY_VALUES: [(NutrientKey, f64); 23] = [
    (NutrientKey::Calories, 2000.0),
    (NutrientKey::Protein, 50.0),
    (NutrientKey::Carbs, 275.0),
    (NutrientKey::Fiber, 28.0),
    (NutrientKey::Fat, 78.0),
    (NutrientKey::VitaminA, 900.0),
    (NutrientKey::VitaminC, 90.0),
    (NutrientKey::VitaminD, 20.0),
    (NutrientKey::VitaminE, 15.0),
    (NutrientKey::VitaminK, 120.0),
    (NutrientKey::Thiamin, 1.2),
    (NutrientKey::Riboflavin, 1.3),
    (NutrientKey::Niacin, 16.0),
    (NutrientKey::VitaminB6, 1.7),
    (NutrientKey::VitaminB12, 2.4),
    (NutrientKey::Calcium, 1300.0),
    (NutrientKey::Iron, 18.0),
    (NutrientKey::Magnesium, 420.0),
    (NutrientKey::Phosphorus, 1250.0),
    (NutrientKey::Potassium, 4700.0),
    (NutrientKey::Zinc, 11.0),
    (NutrientKey::Sodium, 2300.0),
    (NutrientKey::Omega3, 1.6),
];

/// Default recommended values plus the reference calorie level they assume
///
/// Immutable once constructed; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientProfile {
    reference_calories: f64,
    defaults: RecommendedValues,
}

impl Default for NutrientProfile {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NutrientProfile {
    /// Built-in FDA adult daily values
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            reference_calories: REFERENCE_CALORIES,
            defaults: BUILTIN_DAILY_VALUES.into_iter().collect(),
        }
    }

    /// Build a validated profile
    ///
    /// # Errors
    ///
    /// Returns an error if a nutrient is missing, a value is not strictly
    /// positive, or the reference calorie level is not positive
    pub fn new(reference_calories: f64, defaults: RecommendedValues) -> Result<Self, ConfigError> {
        if !reference_calories.is_finite() || reference_calories <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "referenceCalories must be a positive number",
            ));
        }
        defaults.require_all()?;
        defaults.validate()?;
        Ok(Self {
            reference_calories,
            defaults,
        })
    }

    /// Parse a profile from its JSON representation
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the profile is invalid
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ProfileFile =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let defaults = RecommendedValues::from_raw(&file.values)?;
        Self::new(file.reference_calories, defaults)
    }

    /// Load a profile from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the profile is invalid
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            reference_calories = profile.reference_calories,
            "Loaded nutrient profile"
        );
        Ok(profile)
    }

    /// Calorie level the defaults are defined for
    #[must_use]
    pub const fn reference_calories(&self) -> f64 {
        self.reference_calories
    }

    /// Default recommended amount for a nutrient
    #[must_use]
    pub fn default_value(&self, nutrient: NutrientKey) -> Option<f64> {
        self.defaults.get(nutrient)
    }

    /// Fresh recommended values, optionally personalized to a calorie target
    ///
    /// With a target, the macronutrients (calories, protein, carbs, fiber,
    /// fat) scale by `target / reference`; micronutrients are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidTargetCalories`] for a non-positive,
    /// non-finite, or out-of-range target
    pub fn recommended_values(
        &self,
        target_calories: Option<f64>,
    ) -> Result<RecommendedValues, InputError> {
        let Some(target) = validate_target_calories(target_calories)? else {
            return Ok(self.defaults.clone());
        };

        let scale = target / self.reference_calories;
        debug!(target, scale, "Personalizing recommended values");
        Ok(self
            .defaults
            .iter()
            .map(|(nutrient, value)| match nutrient.category() {
                NutrientCategory::Macronutrient => (nutrient, value * scale),
                _ => (nutrient, value),
            })
            .collect())
    }

    /// Catalog rows for every tracked nutrient, in dashboard order
    #[must_use]
    pub fn entries(&self) -> Vec<ProfileEntry> {
        NutrientKey::ALL
            .into_iter()
            .map(|key| ProfileEntry {
                key,
                display_name: key.display_name(),
                unit: key.unit(),
                category: key.category(),
                default_recommended: self.defaults.get(key).unwrap_or_default(),
            })
            .collect()
    }
}
