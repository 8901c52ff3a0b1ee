// ABOUTME: Severity classification for nutrients falling short of their target
// ABOUTME: Produces the worst-first Deficiency list from a nutrient status map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ConfigError;
use crate::gap_analyzer::NutrientAnalysis;
use nutrigap_core::constants::{
    severity_bands::{MODERATE_BELOW_PERCENT, SEVERE_BELOW_PERCENT},
    status_thresholds::{GOOD_PERCENT, MET_PERCENT},
};
use nutrigap_core::models::{Deficiency, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which nutrients are ranked for recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityEligibility {
    /// Only nutrients below the "good" floor (80%)
    #[default]
    BelowGood,
    /// Every nutrient below 100%, so "good" intakes surface as mild
    BelowMet,
}

impl SeverityEligibility {
    /// Exclusive percentage ceiling for eligibility
    #[must_use]
    pub const fn ceiling(self) -> u32 {
        match self {
            Self::BelowGood => GOOD_PERCENT,
            Self::BelowMet => MET_PERCENT,
        }
    }

    /// Configuration name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BelowGood => "below_good",
            Self::BelowMet => "below_met",
        }
    }
}

impl fmt::Display for SeverityEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityEligibility {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "below_good" => Ok(Self::BelowGood),
            "below_met" => Ok(Self::BelowMet),
            other => Err(ConfigError::Parse(format!(
                "Unknown severity eligibility '{other}' (expected below_good or below_met)"
            ))),
        }
    }
}

/// Severity band floors plus the eligibility ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityPolicy {
    /// Eligibility ceiling
    pub eligibility: SeverityEligibility,
    /// Percentages below this are severe
    pub severe_below: u32,
    /// Percentages below this (and not severe) are moderate
    pub moderate_below: u32,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self {
            eligibility: SeverityEligibility::default(),
            severe_below: SEVERE_BELOW_PERCENT,
            moderate_below: MODERATE_BELOW_PERCENT,
        }
    }
}

impl SeverityPolicy {
    /// Policy with default bands and the given eligibility
    #[must_use]
    pub fn with_eligibility(eligibility: SeverityEligibility) -> Self {
        Self {
            eligibility,
            ..Self::default()
        }
    }

    /// Validate band ordering: `0 < severe_below <= moderate_below <= ceiling`
    ///
    /// # Errors
    ///
    /// Returns an error if the bands are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.severe_below == 0 {
            return Err(ConfigError::InvalidRange("severe_below must be > 0"));
        }
        if self.severe_below > self.moderate_below {
            return Err(ConfigError::InvalidRange(
                "severe_below must be <= moderate_below",
            ));
        }
        if self.moderate_below > self.eligibility.ceiling() {
            return Err(ConfigError::InvalidRange(
                "moderate_below must be <= the eligibility ceiling",
            ));
        }
        Ok(())
    }

    /// Severity tier for a percentage, `None` when not eligible
    #[must_use]
    pub const fn classify(&self, percentage: u32) -> Option<Severity> {
        if percentage >= self.eligibility.ceiling() {
            None
        } else if percentage < self.severe_below {
            Some(Severity::Severe)
        } else if percentage < self.moderate_below {
            Some(Severity::Moderate)
        } else {
            Some(Severity::Mild)
        }
    }
}

/// Build the ordered deficiency list for a status map
///
/// Sorted ascending by percentage (most severe first); ties are broken by
/// the nutrient's wire key so output is stable regardless of map order.
#[must_use]
pub fn classify_deficiencies(
    analysis: &NutrientAnalysis,
    policy: &SeverityPolicy,
) -> Vec<Deficiency> {
    let mut deficiencies: Vec<Deficiency> = analysis
        .iter()
        .filter_map(|(nutrient, status)| {
            policy
                .classify(status.percentage)
                .map(|severity| Deficiency {
                    nutrient: *nutrient,
                    consumed: status.consumed,
                    recommended: status.recommended,
                    percentage: status.percentage,
                    severity,
                })
        })
        .collect();

    deficiencies.sort_by(|a, b| {
        a.percentage
            .cmp(&b.percentage)
            .then_with(|| a.nutrient.as_str().cmp(b.nutrient.as_str()))
    });
    deficiencies
}
