// ABOUTME: Nutrient analysis and supplement recommendation route handlers
// ABOUTME: JSON in, JSON out; failures are rendered through AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Analysis routes
//!
//! - `POST /api/analysis/nutrients`: per-nutrient status
//! - `POST /api/analysis/recommendations`: worst-first supplement suggestions
//! - `GET /api/nutrients`: units, labels, and default targets

use crate::{
    resources::ServerResources,
    services::{
        AnalysisRequest, AnalysisResponse, AnalysisService, NutrientCatalogResponse,
        RecommendationResponse,
    },
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use nutrigap_core::constants::endpoints;
use nutrigap_core::errors::{AppError, AppResult};
use std::sync::Arc;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Analysis routes implementation
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create all analysis routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::ANALYSIS_NUTRIENTS, post(Self::handle_analyze))
            .route(
                endpoints::ANALYSIS_RECOMMENDATIONS,
                post(Self::handle_recommend),
            )
            .route(endpoints::NUTRIENT_CATALOG, get(Self::handle_catalog))
            .with_state(resources)
    }

    /// Handle nutrient status analysis
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<AnalysisRequest>, JsonRejection>,
    ) -> AppResult<Json<AnalysisResponse>> {
        let request = Self::parse_body(payload, &headers)?;
        AnalysisService::new(resources)
            .analyze(&request)
            .map(Json)
            .map_err(|e| Self::tag_request(e, &headers))
    }

    /// Handle supplement recommendations
    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<AnalysisRequest>, JsonRejection>,
    ) -> AppResult<Json<RecommendationResponse>> {
        let request = Self::parse_body(payload, &headers)?;
        AnalysisService::new(resources)
            .recommend(&request)
            .map(Json)
            .map_err(|e| Self::tag_request(e, &headers))
    }

    /// Handle nutrient catalog listing
    async fn handle_catalog(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<NutrientCatalogResponse> {
        Json(AnalysisService::new(resources).nutrient_catalog())
    }

    fn parse_body(
        payload: Result<Json<AnalysisRequest>, JsonRejection>,
        headers: &HeaderMap,
    ) -> AppResult<AnalysisRequest> {
        payload
            .map(|Json(request)| request)
            .map_err(|rejection| {
                Self::tag_request(
                    AppError::invalid_input(format!(
                        "Invalid analysis request: {}",
                        rejection.body_text()
                    )),
                    headers,
                )
            })
    }

    fn tag_request(error: AppError, headers: &HeaderMap) -> AppError {
        match headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            Some(request_id) => error.with_request_id(request_id),
            None => error,
        }
    }
}
