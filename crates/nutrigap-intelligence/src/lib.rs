// ABOUTME: Nutrient gap analysis engine: gap analysis, severity tiers, supplement matching
// ABOUTME: Pure, stateless transforms over caller-supplied intake and recommended-value snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrigap Intelligence
//!
//! The recommendation engine. Given a [`DailyIntake`] snapshot and a
//! [`RecommendedValues`] table it classifies every tracked nutrient, ranks
//! the shortfalls by severity and attaches curated supplement metadata.
//!
//! Nothing here holds state across calls or performs I/O at analysis time.
//! The [`NutrientProfile`] and [`SupplementCatalog`] are loaded once at
//! start-up and shared read-only.

/// Engine configuration (severity policy) and configuration errors
pub mod config;

/// Intake snapshots and lenient input sanitisation
pub mod intake;

/// Default recommended daily values and personalization
pub mod profile;

/// Per-nutrient status computation
pub mod gap_analyzer;

/// Severity tiers for nutrients below target
pub mod severity;

/// Curated supplement knowledge base
pub mod supplements;

/// Orchestration of analysis, classification, and matching
pub mod recommendation_composer;

pub use config::{AnalysisConfig, ConfigError};
pub use gap_analyzer::{analyze_gaps, intake_percentage, NutrientAnalysis};
pub use intake::{validate_target_calories, DailyIntake, InputError};
pub use profile::{NutrientProfile, ProfileEntry, RecommendedValues};
pub use recommendation_composer::{AnalysisSnapshot, RecommendationComposer};
pub use severity::{classify_deficiencies, SeverityEligibility, SeverityPolicy};
pub use supplements::{CatalogEntry, SupplementCatalog};
