// ABOUTME: Tracked nutrient identity: keys, canonical units, and dashboard categories
// ABOUTME: NutrientKey is the closed set of nutrients the engine analyses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::formatters::format_nutrient_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the nutrients tracked by the analysis engine
///
/// The serialized form is the compact camelCase key used on the wire
/// (`vitaminB12`, `omega3`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientKey {
    /// Energy intake
    Calories,
    /// Protein
    Protein,
    /// Carbohydrates
    Carbs,
    /// Dietary fiber
    Fiber,
    /// Total fat
    Fat,
    /// Vitamin A (RAE)
    VitaminA,
    /// Vitamin C
    VitaminC,
    /// Vitamin D
    VitaminD,
    /// Vitamin E
    VitaminE,
    /// Vitamin K
    VitaminK,
    /// Thiamin (B1)
    Thiamin,
    /// Riboflavin (B2)
    Riboflavin,
    /// Niacin (B3)
    Niacin,
    /// Vitamin B6
    VitaminB6,
    /// Vitamin B12
    VitaminB12,
    /// Calcium
    Calcium,
    /// Iron
    Iron,
    /// Magnesium
    Magnesium,
    /// Phosphorus
    Phosphorus,
    /// Potassium
    Potassium,
    /// Zinc
    Zinc,
    /// Sodium
    Sodium,
    /// Omega-3 fatty acids
    Omega3,
}

impl NutrientKey {
    /// Every tracked nutrient, in dashboard order
    pub const ALL: [Self; 23] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fiber,
        Self::Fat,
        Self::VitaminA,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
        Self::VitaminK,
        Self::Thiamin,
        Self::Riboflavin,
        Self::Niacin,
        Self::VitaminB6,
        Self::VitaminB12,
        Self::Calcium,
        Self::Iron,
        Self::Magnesium,
        Self::Phosphorus,
        Self::Potassium,
        Self::Zinc,
        Self::Sodium,
        Self::Omega3,
    ];

    /// Compact wire key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fiber => "fiber",
            Self::Fat => "fat",
            Self::VitaminA => "vitaminA",
            Self::VitaminC => "vitaminC",
            Self::VitaminD => "vitaminD",
            Self::VitaminE => "vitaminE",
            Self::VitaminK => "vitaminK",
            Self::Thiamin => "thiamin",
            Self::Riboflavin => "riboflavin",
            Self::Niacin => "niacin",
            Self::VitaminB6 => "vitaminB6",
            Self::VitaminB12 => "vitaminB12",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::Magnesium => "magnesium",
            Self::Phosphorus => "phosphorus",
            Self::Potassium => "potassium",
            Self::Zinc => "zinc",
            Self::Sodium => "sodium",
            Self::Omega3 => "omega3",
        }
    }

    /// Canonical unit amounts of this nutrient are expressed in
    #[must_use]
    pub const fn unit(self) -> NutrientUnit {
        match self {
            Self::Calories => NutrientUnit::Calories,
            Self::Protein | Self::Carbs | Self::Fiber | Self::Fat | Self::Omega3 => {
                NutrientUnit::Grams
            }
            Self::VitaminA | Self::VitaminD | Self::VitaminK | Self::VitaminB12 => {
                NutrientUnit::Micrograms
            }
            Self::VitaminC
            | Self::VitaminE
            | Self::Thiamin
            | Self::Riboflavin
            | Self::Niacin
            | Self::VitaminB6
            | Self::Calcium
            | Self::Iron
            | Self::Magnesium
            | Self::Phosphorus
            | Self::Potassium
            | Self::Zinc
            | Self::Sodium => NutrientUnit::Milligrams,
        }
    }

    /// Dashboard grouping for this nutrient
    #[must_use]
    pub const fn category(self) -> NutrientCategory {
        match self {
            Self::Calories | Self::Protein | Self::Carbs | Self::Fiber | Self::Fat => {
                NutrientCategory::Macronutrient
            }
            Self::VitaminA
            | Self::VitaminC
            | Self::VitaminD
            | Self::VitaminE
            | Self::VitaminK
            | Self::Thiamin
            | Self::Riboflavin
            | Self::Niacin
            | Self::VitaminB6
            | Self::VitaminB12 => NutrientCategory::Vitamin,
            Self::Calcium
            | Self::Iron
            | Self::Magnesium
            | Self::Phosphorus
            | Self::Potassium
            | Self::Zinc
            | Self::Sodium => NutrientCategory::Mineral,
            Self::Omega3 => NutrientCategory::Other,
        }
    }

    /// Human-readable label (`vitaminB12` -> "Vitamin B12")
    #[must_use]
    pub fn display_name(self) -> String {
        format_nutrient_name(self.as_str())
    }
}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a tracked nutrient key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown nutrient key: {0}")]
pub struct ParseNutrientError(pub String);

impl FromStr for NutrientKey {
    type Err = ParseNutrientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseNutrientError(s.to_owned()))
    }
}

/// Unit a nutrient amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientUnit {
    /// Kilocalories (displayed as "cal")
    #[serde(rename = "cal")]
    Calories,
    /// Grams
    #[serde(rename = "g")]
    Grams,
    /// Milligrams
    #[serde(rename = "mg")]
    Milligrams,
    /// Micrograms
    #[serde(rename = "mcg")]
    Micrograms,
}

impl NutrientUnit {
    /// Display suffix
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Calories => "cal",
            Self::Grams => "g",
            Self::Milligrams => "mg",
            Self::Micrograms => "mcg",
        }
    }
}

impl fmt::Display for NutrientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Dashboard grouping for nutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientCategory {
    /// Calories, protein, carbs, fiber, fat
    Macronutrient,
    /// Fat- and water-soluble vitamins
    Vitamin,
    /// Minerals and electrolytes
    Mineral,
    /// Everything else (omega-3)
    Other,
}

impl NutrientCategory {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Macronutrient => "macronutrient",
            Self::Vitamin => "vitamin",
            Self::Mineral => "mineral",
            Self::Other => "other",
        }
    }
}
