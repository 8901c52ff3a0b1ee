// ABOUTME: Core data models for nutrient gap analysis
// ABOUTME: Re-exports nutrient identity types and analysis result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Nutrient keys, units, and categories
pub mod nutrient;

/// Per-nutrient status, deficiencies, supplements, and recommendations
pub mod analysis;

pub use analysis::{
    Deficiency, IntakeStatus, NutrientStatus, Recommendation, RenderPolicy, Severity, Supplement,
};
pub use nutrient::{NutrientCategory, NutrientKey, NutrientUnit, ParseNutrientError};
