// ABOUTME: Gap analysis computing consumed, recommended, percentage, and status per nutrient
// ABOUTME: Validates the whole recommended table before computing anything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ConfigError;
use crate::intake::DailyIntake;
use crate::profile::RecommendedValues;
use nutrigap_core::models::{IntakeStatus, NutrientKey, NutrientStatus};
use std::collections::BTreeMap;
use tracing::debug;

/// Status of every tracked nutrient, keyed by nutrient
pub type NutrientAnalysis = BTreeMap<NutrientKey, NutrientStatus>;

/// `round(consumed / recommended * 100)`, rounding half away from zero
///
/// Saturates at `u32::MAX`. Callers guarantee `recommended > 0`.
#[must_use]
pub fn intake_percentage(consumed: f64, recommended: f64) -> u32 {
    // float-to-int `as` saturates
    (consumed / recommended * 100.0).round() as u32
}

/// Compute the status of every nutrient in `recommended`
///
/// Nutrients absent from the intake are reported with `consumed = 0`; none
/// is ever omitted. No partial result is produced on failure.
///
/// # Errors
///
/// Returns [`ConfigError::NonPositiveRecommendation`] when any recommended
/// value is zero, negative, or not finite
pub fn analyze_gaps(
    intake: &DailyIntake,
    recommended: &RecommendedValues,
) -> Result<NutrientAnalysis, ConfigError> {
    recommended.validate()?;

    let analysis: NutrientAnalysis = recommended
        .iter()
        .map(|(nutrient, target)| {
            let consumed = intake.consumed(nutrient);
            let percentage = intake_percentage(consumed, target);
            (
                nutrient,
                NutrientStatus {
                    consumed,
                    recommended: target,
                    percentage,
                    status: IntakeStatus::from_percentage(percentage),
                },
            )
        })
        .collect();

    debug!(
        tracked = analysis.len(),
        recorded = intake.len(),
        "Computed nutrient gap analysis"
    );
    Ok(analysis)
}
