// ABOUTME: Configuration error types for profile, catalog, and severity policy validation
// ABOUTME: A ConfigError is a deployment fault, never a user input problem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration error types for engine validation.

use nutrigap_core::errors::AppError;
use nutrigap_core::models::NutrientKey;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Recommended value is zero, negative, or not finite
    #[error("Recommended value for {nutrient} must be a positive finite number, got {value}")]
    NonPositiveRecommendation {
        /// Offending nutrient
        nutrient: NutrientKey,
        /// Offending value
        value: f64,
    },

    /// A nutrient profile does not define every tracked nutrient
    #[error("Missing recommended value for {0}")]
    MissingRecommendation(NutrientKey),

    /// Recommended values or catalog reference a nutrient that is not tracked
    #[error("Unknown nutrient: {0}")]
    UnknownNutrient(String),

    /// Supplement catalog lists the same nutrient twice
    #[error("Duplicate supplement entry for {0}")]
    DuplicateSupplement(NutrientKey),

    /// Supplement catalog entry fails validation
    #[error("Invalid supplement entry for {nutrient}: {reason}")]
    InvalidSupplement {
        /// Nutrient of the offending entry
        nutrient: NutrientKey,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
}

impl ConfigError {
    /// Nutrient the error relates to, when there is one
    #[must_use]
    pub fn nutrient(&self) -> Option<NutrientKey> {
        match self {
            Self::NonPositiveRecommendation { nutrient, .. }
            | Self::InvalidSupplement { nutrient, .. }
            | Self::MissingRecommendation(nutrient)
            | Self::DuplicateSupplement(nutrient) => Some(*nutrient),
            Self::UnknownNutrient(_)
            | Self::InvalidRange(_)
            | Self::Parse(_)
            | Self::Io { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrigap_core::errors::ErrorCode;

    #[test]
    fn test_config_error_maps_to_config_invalid() {
        let error = ConfigError::NonPositiveRecommendation {
            nutrient: NutrientKey::Zinc,
            value: 0.0,
        };
        let app_error = AppError::from(error);

        assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
        assert_eq!(app_error.http_status(), 500);
        assert!(app_error.source.is_some());
        assert!(app_error.message.contains("zinc"));
        assert_eq!(app_error.user_message(), "Configuration is invalid");
    }
}
