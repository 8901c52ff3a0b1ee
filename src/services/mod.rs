// ABOUTME: Domain service layer for logic shared by route handlers and the CLI
// ABOUTME: Keeps request translation out of the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer

/// Nutrient analysis, recommendations, and the nutrient catalog
pub mod analysis;

pub use analysis::{
    AnalysisRequest, AnalysisResponse, AnalysisService, NutrientCatalogResponse,
    RecommendationResponse,
};
