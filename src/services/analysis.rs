// ABOUTME: Analysis service translating the wire contract into engine calls
// ABOUTME: Owns lenient input handling and the configuration-fault-to-user error translation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::resources::ServerResources;
use nutrigap_core::errors::{AppError, AppResult};
use nutrigap_core::models::{NutrientKey, NutrientStatus, Recommendation};
use nutrigap_intelligence::{
    analyze_gaps, validate_target_calories, AnalysisSnapshot, ConfigError, DailyIntake,
    ProfileEntry, RecommendationComposer, RecommendedValues,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Body of both analysis endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Consumed amounts keyed by nutrient; parsed leniently
    #[serde(default)]
    pub consumed_nutrients: Value,
    /// Targets keyed by nutrient; empty means "use the nutrient profile"
    #[serde(default)]
    pub recommended_values: BTreeMap<String, f64>,
    /// Personalized calorie target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_calories: Option<f64>,
}

/// Per-nutrient status report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Status of every tracked nutrient
    pub nutrient_analysis: BTreeMap<NutrientKey, NutrientStatus>,
    /// Calories consumed
    pub total_calories: f64,
    /// Calorie target the analysis used
    pub target_calories: f64,
}

/// Worst-first supplement recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Empty when no deficiencies were found
    pub recommendations: Vec<Recommendation>,
}

/// Units, labels, categories, and default targets for every nutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientCatalogResponse {
    /// One row per tracked nutrient
    pub nutrients: Vec<ProfileEntry>,
}

/// Inputs resolved from a request, ready for the engine
struct PreparedAnalysis {
    intake: DailyIntake,
    recommended: RecommendedValues,
    target_calories: f64,
}

/// Analysis operations shared by the HTTP routes and the CLI
pub struct AnalysisService {
    resources: Arc<ServerResources>,
}

impl AnalysisService {
    /// Create a service over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Compute the status of every tracked nutrient
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a bad `targetCalories` and
    /// `CONFIG_INVALID` for an invalid recommended-value table
    pub fn analyze(&self, request: &AnalysisRequest) -> AppResult<AnalysisResponse> {
        let prepared = self.prepare(request)?;
        let nutrient_analysis =
            analyze_gaps(&prepared.intake, &prepared.recommended).map_err(config_failure)?;

        Ok(AnalysisResponse {
            nutrient_analysis,
            total_calories: prepared.intake.consumed(NutrientKey::Calories),
            target_calories: prepared.target_calories,
        })
    }

    /// Produce ranked supplement recommendations
    ///
    /// # Errors
    ///
    /// Same as [`Self::analyze`]
    pub fn recommend(&self, request: &AnalysisRequest) -> AppResult<RecommendationResponse> {
        let prepared = self.prepare(request)?;
        let recommendations = self
            .composer()
            .compose(&prepared.intake, &prepared.recommended)
            .map_err(config_failure)?;

        debug!(count = recommendations.len(), "Recommendations ready");
        Ok(RecommendationResponse { recommendations })
    }

    /// Recommendations for many independent requests, analysed in parallel
    ///
    /// Results keep the input order; a failing request does not affect the
    /// others.
    #[must_use]
    pub fn recommend_batch(
        &self,
        requests: &[AnalysisRequest],
    ) -> Vec<AppResult<RecommendationResponse>> {
        let mut outcomes = Vec::with_capacity(requests.len());
        let mut snapshots = Vec::new();
        let mut pending = Vec::new();

        for (index, request) in requests.iter().enumerate() {
            match self.prepare(request) {
                Ok(prepared) => {
                    pending.push(index);
                    snapshots.push(AnalysisSnapshot {
                        intake: prepared.intake,
                        recommended: prepared.recommended,
                    });
                    outcomes.push(Ok(RecommendationResponse {
                        recommendations: Vec::new(),
                    }));
                }
                Err(e) => outcomes.push(Err(e)),
            }
        }

        let composed = self.composer().compose_batch(&snapshots);
        for (index, result) in pending.into_iter().zip(composed) {
            if let Some(slot) = outcomes.get_mut(index) {
                *slot = result
                    .map(|recommendations| RecommendationResponse { recommendations })
                    .map_err(config_failure);
            }
        }
        outcomes
    }

    /// Nutrient catalog for presentation
    #[must_use]
    pub fn nutrient_catalog(&self) -> NutrientCatalogResponse {
        NutrientCatalogResponse {
            nutrients: self.resources.profile.entries(),
        }
    }

    fn composer(&self) -> RecommendationComposer<'_> {
        RecommendationComposer::new(
            &self.resources.catalog,
            &self.resources.analysis.severity,
        )
    }

    fn prepare(&self, request: &AnalysisRequest) -> AppResult<PreparedAnalysis> {
        let target = validate_target_calories(request.target_calories)?;

        let (intake, issues) = DailyIntake::from_lenient(&request.consumed_nutrients);
        if !issues.is_empty() {
            warn!(
                issues = issues.len(),
                "Intake contained entries that were ignored or zeroed"
            );
        }

        let recommended = if request.recommended_values.is_empty() {
            self.resources.profile.recommended_values(target)?
        } else {
            RecommendedValues::from_raw(&request.recommended_values).map_err(config_failure)?
        };

        let target_calories = target
            .or_else(|| recommended.get(NutrientKey::Calories))
            .unwrap_or_else(|| self.resources.profile.reference_calories());

        Ok(PreparedAnalysis {
            intake,
            recommended,
            target_calories,
        })
    }
}

/// Log a configuration fault in full and convert it for the caller
fn config_failure(error: ConfigError) -> AppError {
    error!(
        error = %error,
        nutrient = error.nutrient().map(NutrientKey::as_str),
        "Analysis configuration fault"
    );
    AppError::from(error)
}
