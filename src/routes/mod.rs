// ABOUTME: Route module organization and router assembly for the analysis service
// ABOUTME: Merges domain routes and applies tracing, request-id, timeout, and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP route organization

/// Nutrient analysis, recommendation, and catalog routes
pub mod analysis;
/// Health and readiness routes
pub mod health;

pub use analysis::AnalysisRoutes;
pub use health::HealthRoutes;

use crate::middleware::{setup_cors, PrefixedRequestId};
use crate::resources::ServerResources;
use axum::Router;
use http::header::HeaderName;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the complete application router
///
/// Every request gets an `x-request-id` (generated when absent), a trace
/// span, and the configured timeout.
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let timeout = resources.config.request_timeout();
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AnalysisRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    PrefixedRequestId,
                ))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(TimeoutLayer::new(timeout))
                .layer(cors),
        )
}
