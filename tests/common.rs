// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and ready-made server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutrigap_server`

use nutrigap_intelligence::{
    AnalysisConfig, NutrientProfile, SeverityEligibility, SeverityPolicy, SupplementCatalog,
};
use nutrigap_server::config::ServerConfig;
use nutrigap_server::resources::ServerResources;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Built-in profile and catalog with the default severity policy
pub fn default_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::with_defaults())
}

/// Built-in profile with an explicit catalog and eligibility policy
pub fn resources_with(
    catalog: SupplementCatalog,
    eligibility: SeverityEligibility,
) -> Arc<ServerResources> {
    init_test_logging();
    let analysis = AnalysisConfig {
        severity: SeverityPolicy::with_eligibility(eligibility),
    };
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        analysis,
        NutrientProfile::builtin(),
        catalog,
    ))
}
