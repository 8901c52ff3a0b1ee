// ABOUTME: Shared read-only server resources built once at start-up
// ABOUTME: Bundles configuration, nutrient profile, and supplement catalog for request handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ServerConfig;
use nutrigap_intelligence::{AnalysisConfig, ConfigError, NutrientProfile, SupplementCatalog};
use tracing::info;

/// Everything a request needs, loaded and validated before the first request
///
/// Handlers receive this behind an `Arc`; nothing in it is mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Process configuration
    pub config: ServerConfig,
    /// Engine configuration
    pub analysis: AnalysisConfig,
    /// Default recommended values
    pub profile: NutrientProfile,
    /// Curated supplement knowledge base
    pub catalog: SupplementCatalog,
}

impl ServerResources {
    /// Assemble resources from already-loaded parts
    #[must_use]
    pub fn new(
        config: ServerConfig,
        analysis: AnalysisConfig,
        profile: NutrientProfile,
        catalog: SupplementCatalog,
    ) -> Self {
        Self {
            config,
            analysis,
            profile,
            catalog,
        }
    }

    /// Load engine configuration from the environment and the optional
    /// profile/catalog files named in `config`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any of them is invalid; the service must
    /// not start in that case
    pub fn from_config(config: ServerConfig) -> Result<Self, ConfigError> {
        let analysis = AnalysisConfig::load()?;

        let profile = match &config.nutrient_profile_path {
            Some(path) => NutrientProfile::load(path)?,
            None => NutrientProfile::builtin(),
        };
        let catalog = match &config.supplement_catalog_path {
            Some(path) => SupplementCatalog::load(path)?,
            None => SupplementCatalog::builtin(),
        };

        info!(
            eligibility = %analysis.severity.eligibility,
            severe_below = analysis.severity.severe_below,
            moderate_below = analysis.severity.moderate_below,
            supplements = catalog.len(),
            "Analysis resources ready"
        );
        Ok(Self::new(config, analysis, profile, catalog))
    }

    /// Built-in profile and catalog with default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            ServerConfig::default(),
            AnalysisConfig::default(),
            NutrientProfile::builtin(),
            SupplementCatalog::builtin(),
        )
    }
}
