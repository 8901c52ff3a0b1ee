// ABOUTME: Constants organized by domain for nutrient gap analysis
// ABOUTME: Status thresholds, severity band defaults, service defaults, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Intake status thresholds, as percentages of the recommended value
pub mod status_thresholds {
    /// At or above this percentage the target is met
    pub const MET_PERCENT: u32 = 100;
    /// At or above this percentage (and below met) intake is good
    pub const GOOD_PERCENT: u32 = 80;
    /// At or above this percentage (and below good) intake is low
    pub const LOW_PERCENT: u32 = 50;
}

/// Default severity band floors used for recommendations
pub mod severity_bands {
    /// Below this percentage a deficiency is severe
    pub const SEVERE_BELOW_PERCENT: u32 = 50;
    /// Below this percentage (and not severe) a deficiency is moderate
    pub const MODERATE_BELOW_PERCENT: u32 = 70;
}

/// Reference diet used by the built-in nutrient profile
pub mod reference_diet {
    /// Calorie level the built-in daily values are defined for (kcal)
    pub const REFERENCE_CALORIES: f64 = 2000.0;
    /// Upper bound accepted for a personalized calorie target (kcal)
    pub const MAX_TARGET_CALORIES: f64 = 10_000.0;
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service defaults
pub mod defaults {
    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default request timeout applied around each analysis request (seconds)
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Service names for structured logging
pub mod service_names {
    /// Name of the HTTP service
    pub const NUTRIGAP_SERVER: &str = "nutrigap-server";
}

/// API endpoints
pub mod endpoints {
    /// Nutrient status analysis endpoint
    pub const ANALYSIS_NUTRIENTS: &str = "/api/analysis/nutrients";
    /// Supplement recommendation endpoint
    pub const ANALYSIS_RECOMMENDATIONS: &str = "/api/analysis/recommendations";
    /// Nutrient catalog (units, display names, categories)
    pub const NUTRIENT_CATALOG: &str = "/api/nutrients";
    /// Health check endpoint
    pub const HEALTH: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
}

/// Environment variable names
pub mod env_config {
    /// HTTP port override
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address override
    pub const HOST: &str = "HOST";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins (`*` allows any)
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "NUTRIGAP_REQUEST_TIMEOUT_SECS";
    /// Path to a JSON nutrient profile replacing the built-in daily values
    pub const NUTRIENT_PROFILE: &str = "NUTRIGAP_NUTRIENT_PROFILE";
    /// Path to a JSON supplement catalog replacing the built-in catalog
    pub const SUPPLEMENT_CATALOG: &str = "NUTRIGAP_SUPPLEMENT_CATALOG";
    /// Severity eligibility policy (`below_good` or `below_met`)
    pub const SEVERITY_ELIGIBILITY: &str = "NUTRIGAP_SEVERITY_ELIGIBILITY";
    /// Severe band floor override
    pub const SEVERITY_SEVERE_BELOW: &str = "NUTRIGAP_SEVERITY_SEVERE_BELOW";
    /// Moderate band floor override
    pub const SEVERITY_MODERATE_BELOW: &str = "NUTRIGAP_SEVERITY_MODERATE_BELOW";
}
