// ABOUTME: Unit tests for analysis engine configuration
// ABOUTME: Validates defaults, environment overrides, and band ordering errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrigap_core::constants::env_config;
use nutrigap_core::errors::{AppError, ErrorCode};
use nutrigap_intelligence::{AnalysisConfig, ConfigError, SeverityEligibility, SeverityPolicy};
use serial_test::serial;
use std::env;

fn clear_severity_env() {
    env::remove_var(env_config::SEVERITY_ELIGIBILITY);
    env::remove_var(env_config::SEVERITY_SEVERE_BELOW);
    env::remove_var(env_config::SEVERITY_MODERATE_BELOW);
}

#[test]
fn test_default_config_validation() {
    let config = AnalysisConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(
        config.severity.eligibility,
        SeverityEligibility::BelowGood
    );
    assert_eq!(config.severity.severe_below, 50);
    assert_eq!(config.severity.moderate_below, 70);
}

#[test]
fn test_inverted_bands_are_rejected() {
    let mut config = AnalysisConfig::default();
    config.severity.severe_below = 75;
    config.severity.moderate_below = 60;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_moderate_band_cannot_exceed_eligibility_ceiling() {
    let mut policy = SeverityPolicy::default();
    policy.moderate_below = 90;
    assert!(policy.validate().is_err());

    policy.eligibility = SeverityEligibility::BelowMet;
    assert!(policy.validate().is_ok());
}

#[test]
fn test_eligibility_parsing() {
    assert_eq!(
        "below_met".parse::<SeverityEligibility>().unwrap(),
        SeverityEligibility::BelowMet
    );
    assert_eq!(
        " Below_Good ".parse::<SeverityEligibility>().unwrap(),
        SeverityEligibility::BelowGood
    );
    assert!("sometimes".parse::<SeverityEligibility>().is_err());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_severity_env();
    env::set_var(env_config::SEVERITY_ELIGIBILITY, "below_met");
    env::set_var(env_config::SEVERITY_SEVERE_BELOW, "40");
    env::set_var(env_config::SEVERITY_MODERATE_BELOW, "85");

    let config = AnalysisConfig::load().unwrap();

    assert_eq!(config.severity.eligibility, SeverityEligibility::BelowMet);
    assert_eq!(config.severity.severe_below, 40);
    assert_eq!(config.severity.moderate_below, 85);

    clear_severity_env();
}

#[test]
#[serial]
fn test_unparseable_override_is_config_error() {
    clear_severity_env();
    env::set_var(env_config::SEVERITY_SEVERE_BELOW, "half");

    let result = AnalysisConfig::load();
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    clear_severity_env();
}

#[test]
#[serial]
fn test_unparseable_override_keeps_underlying_message() {
    clear_severity_env();
    env::set_var(env_config::SEVERITY_ELIGIBILITY, "sometimes");

    let Err(ConfigError::Parse(message)) = AnalysisConfig::load() else {
        panic!("expected a parse error");
    };
    assert!(message.contains(env_config::SEVERITY_ELIGIBILITY));
    assert!(message.contains("expected below_good or below_met"));

    env::set_var(env_config::SEVERITY_ELIGIBILITY, "below_good");
    env::set_var(env_config::SEVERITY_SEVERE_BELOW, "half");
    let Err(ConfigError::Parse(message)) = AnalysisConfig::load() else {
        panic!("expected a parse error");
    };
    assert!(message.contains("invalid digit"));

    clear_severity_env();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_severity_env();
    // 85 is above the default below_good ceiling of 80
    env::set_var(env_config::SEVERITY_MODERATE_BELOW, "85");

    assert!(AnalysisConfig::load().is_err());

    clear_severity_env();
}

#[test]
fn test_config_error_maps_to_config_invalid() {
    let error = AppError::from(ConfigError::InvalidRange("severe_below must be > 0"));
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.http_status(), 500);
    assert_eq!(error.user_message(), "Configuration is invalid");
}
