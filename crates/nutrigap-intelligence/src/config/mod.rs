// ABOUTME: Configuration module for nutrigap-intelligence crate
// ABOUTME: Re-exports analysis configuration and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Configuration error type shared by the profile, catalog, and policy loaders
pub mod error;

/// Analysis engine configuration (severity policy)
pub mod analysis;

pub use analysis::AnalysisConfig;
pub use error::ConfigError;
