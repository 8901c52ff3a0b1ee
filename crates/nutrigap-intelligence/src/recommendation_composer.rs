// ABOUTME: Recommendation composer: gap analysis, severity ranking, and supplement matching
// ABOUTME: Deterministic worst-first output; batch mode fans snapshots out with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ConfigError;
use crate::gap_analyzer::{analyze_gaps, NutrientAnalysis};
use crate::intake::DailyIntake;
use crate::profile::RecommendedValues;
use crate::severity::{classify_deficiencies, SeverityPolicy};
use crate::supplements::SupplementCatalog;
use nutrigap_core::models::Recommendation;
use rayon::prelude::*;
use tracing::debug;

/// One independent intake/target pair for batch composition
#[derive(Debug, Clone, Default)]
pub struct AnalysisSnapshot {
    /// Consumed amounts
    pub intake: DailyIntake,
    /// Targets to compare against
    pub recommended: RecommendedValues,
}

/// Builds the caller-facing recommendation list
///
/// Borrows the shared catalog and policy; holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationComposer<'a> {
    catalog: &'a SupplementCatalog,
    policy: &'a SeverityPolicy,
}

impl<'a> RecommendationComposer<'a> {
    /// Create a composer over a catalog and severity policy
    #[must_use]
    pub const fn new(catalog: &'a SupplementCatalog, policy: &'a SeverityPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Analyse an intake and return recommendations, worst first
    ///
    /// An empty list means no deficiencies were found.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the recommended table is invalid
    pub fn compose(
        &self,
        intake: &DailyIntake,
        recommended: &RecommendedValues,
    ) -> Result<Vec<Recommendation>, ConfigError> {
        let analysis = analyze_gaps(intake, recommended)?;
        Ok(self.compose_from_analysis(&analysis))
    }

    /// Rank and enrich an already-computed status map
    #[must_use]
    pub fn compose_from_analysis(&self, analysis: &NutrientAnalysis) -> Vec<Recommendation> {
        let recommendations: Vec<Recommendation> = classify_deficiencies(analysis, self.policy)
            .into_iter()
            .map(|deficiency| {
                let supplement = self
                    .catalog
                    .match_supplement(deficiency.nutrient, deficiency.severity)
                    .cloned();
                Recommendation {
                    deficiency,
                    supplement,
                }
            })
            .collect();

        debug!(
            deficiencies = recommendations.len(),
            with_supplement = recommendations
                .iter()
                .filter(|r| r.supplement.is_some())
                .count(),
            "Composed recommendations"
        );
        recommendations
    }

    /// Compose many snapshots in parallel
    ///
    /// Results are returned in input order; one bad snapshot does not
    /// affect the others.
    #[must_use]
    pub fn compose_batch(
        &self,
        snapshots: &[AnalysisSnapshot],
    ) -> Vec<Result<Vec<Recommendation>, ConfigError>> {
        snapshots
            .par_iter()
            .map(|snapshot| self.compose(&snapshot.intake, &snapshot.recommended))
            .collect()
    }
}
