// ABOUTME: Analysis engine configuration loaded from defaults and environment overrides
// ABOUTME: Holds the severity policy; validated once at start-up and shared read-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Analysis Engine Configuration
//!
//! Values can be overridden via `NUTRIGAP_SEVERITY_*` environment variables.
//! There is no global instance: the server loads this once and hands it to
//! request handlers by reference.

use super::ConfigError;
use crate::severity::SeverityPolicy;
use nutrigap_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Analysis engine configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Severity eligibility and band floors
    pub severity: SeverityPolicy,
}

impl AnalysisConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the severity bands are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.severity.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|e| ConfigError::Parse(format!("Invalid {env_var_name}: {e}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::SEVERITY_ELIGIBILITY,
            &mut self.severity.eligibility,
        )?;
        Self::apply_env_var(
            env_config::SEVERITY_SEVERE_BELOW,
            &mut self.severity.severe_below,
        )?;
        Self::apply_env_var(
            env_config::SEVERITY_MODERATE_BELOW,
            &mut self.severity.moderate_below,
        )?;
        Ok(self)
    }
}
