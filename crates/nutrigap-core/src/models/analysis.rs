// ABOUTME: Analysis result types: per-nutrient status, deficiencies, supplements, recommendations
// ABOUTME: Status and severity are tagged enums; rendering is delegated to a RenderPolicy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::nutrient::NutrientKey;
use crate::constants::status_thresholds::{GOOD_PERCENT, LOW_PERCENT, MET_PERCENT};
use serde::{Deserialize, Serialize};

/// Intake status of a single nutrient relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeStatus {
    /// 100% or more of the target
    Met,
    /// 80-99% of the target
    Good,
    /// 50-79% of the target
    Low,
    /// Below 50% of the target
    Deficient,
}

impl IntakeStatus {
    /// Classify an intake percentage
    #[must_use]
    pub const fn from_percentage(percentage: u32) -> Self {
        if percentage >= MET_PERCENT {
            Self::Met
        } else if percentage >= GOOD_PERCENT {
            Self::Good
        } else if percentage >= LOW_PERCENT {
            Self::Low
        } else {
            Self::Deficient
        }
    }

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Good => "good",
            Self::Low => "low",
            Self::Deficient => "deficient",
        }
    }
}

/// Severity tier of a deficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Far below target
    Severe,
    /// Noticeably below target
    Moderate,
    /// Slightly below target
    Mild,
}

impl Severity {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Severe => "severe",
            Self::Moderate => "moderate",
            Self::Mild => "mild",
        }
    }
}

/// Analysed state of one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientStatus {
    /// Amount consumed (0 when absent from the intake)
    pub consumed: f64,
    /// Recommended daily amount
    pub recommended: f64,
    /// `round(consumed / recommended * 100)`
    pub percentage: u32,
    /// Status derived from `percentage`
    pub status: IntakeStatus,
}

/// A nutrient falling short of its target, with its severity tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deficiency {
    /// Nutrient concerned
    pub nutrient: NutrientKey,
    /// Amount consumed
    pub consumed: f64,
    /// Recommended daily amount
    pub recommended: f64,
    /// Intake percentage
    pub percentage: u32,
    /// Severity tier
    pub severity: Severity,
}

/// Curated supplement metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplement {
    /// Product or supplement name
    pub name: String,
    /// Short description
    pub description: String,
    /// Dosage guidance
    #[serde(rename = "dosage")]
    pub dosage_guidance: String,
    /// Why the nutrient matters
    #[serde(rename = "importance")]
    pub importance_note: String,
    /// Where to buy
    #[serde(rename = "url")]
    pub purchase_link: String,
}

/// A deficiency plus its matched supplement, if the knowledge base has one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The underlying deficiency
    #[serde(flatten)]
    pub deficiency: Deficiency,
    /// Matched supplement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplement: Option<Supplement>,
}

/// Presentation hook for tagged analysis outcomes
///
/// Colour, icon, or label selection is a presentation concern. Callers that
/// render results implement this trait; the engine never does.
pub trait RenderPolicy {
    /// Rendered form (a label, a colour code, a widget...)
    type Output;

    /// Render an intake status
    fn render_status(&self, status: IntakeStatus) -> Self::Output;

    /// Render a severity tier
    fn render_severity(&self, severity: Severity) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(IntakeStatus::from_percentage(100), IntakeStatus::Met);
        assert_eq!(IntakeStatus::from_percentage(250), IntakeStatus::Met);
        assert_eq!(IntakeStatus::from_percentage(99), IntakeStatus::Good);
        assert_eq!(IntakeStatus::from_percentage(80), IntakeStatus::Good);
        assert_eq!(IntakeStatus::from_percentage(79), IntakeStatus::Low);
        assert_eq!(IntakeStatus::from_percentage(50), IntakeStatus::Low);
        assert_eq!(IntakeStatus::from_percentage(49), IntakeStatus::Deficient);
        assert_eq!(IntakeStatus::from_percentage(0), IntakeStatus::Deficient);
    }

    #[test]
    fn test_recommendation_wire_shape() {
        let recommendation = Recommendation {
            deficiency: Deficiency {
                nutrient: NutrientKey::VitaminD,
                consumed: 0.0,
                recommended: 20.0,
                percentage: 0,
                severity: Severity::Severe,
            },
            supplement: None,
        };
        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["nutrient"], "vitaminD");
        assert_eq!(json["severity"], "severe");
        assert!(json.get("supplement").is_none());
    }

    #[test]
    fn test_supplement_wire_names() {
        let supplement = Supplement {
            name: "Iron Bisglycinate".into(),
            description: "Gentle iron".into(),
            dosage_guidance: "18 mg daily".into(),
            importance_note: "Oxygen transport".into(),
            purchase_link: "https://example.com/iron".into(),
        };
        let json = serde_json::to_value(&supplement).unwrap();
        assert_eq!(json["dosage"], "18 mg daily");
        assert_eq!(json["importance"], "Oxygen transport");
        assert_eq!(json["url"], "https://example.com/iron");
    }
}
