// ABOUTME: HTTP integration tests for nutrient analysis and recommendation routes
// ABOUTME: Tests status codes, response shapes, and error bodies for every analysis endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for analysis routes
//!
//! Routes are exercised through `tower::ServiceExt::oneshot`, with and
//! without the full middleware stack.

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::requests::{analysis_body, iron_deficient_body};
use nutrigap_intelligence::{SeverityEligibility, SupplementCatalog};
use nutrigap_server::routes::{self, AnalysisRoutes};
use serde_json::{json, Value};

fn analysis_routes() -> axum::Router {
    AnalysisRoutes::routes(common::default_resources())
}

// ============================================================================
// POST /api/analysis/nutrients
// ============================================================================

#[tokio::test]
async fn test_analyze_returns_every_nutrient() {
    let body = json!({ "consumedNutrients": { "calories": 1800, "protein": 40 } });

    let response = AxumTestRequest::post("/api/analysis/nutrients")
        .json(&body)
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let analysis = body["nutrientAnalysis"].as_object().unwrap();
    assert_eq!(analysis.len(), 23);
    assert_eq!(analysis["protein"]["percentage"], 80);
    assert_eq!(analysis["protein"]["status"], "good");
    assert_eq!(analysis["zinc"]["consumed"], 0.0);
    assert_eq!(analysis["zinc"]["status"], "deficient");
    assert_eq!(body["totalCalories"], 1800.0);
    assert_eq!(body["targetCalories"], 2000.0);
}

#[tokio::test]
async fn test_analyze_personalizes_macros_only() {
    let body = json!({ "consumedNutrients": {}, "targetCalories": 3000 });

    let response = AxumTestRequest::post("/api/analysis/nutrients")
        .json(&body)
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let analysis = &body["nutrientAnalysis"];
    assert_eq!(analysis["protein"]["recommended"], 75.0);
    assert_eq!(analysis["iron"]["recommended"], 18.0);
    assert_eq!(body["targetCalories"], 3000.0);
}

#[tokio::test]
async fn test_analyze_tolerates_bad_intake_entries() {
    let body = json!({
        "consumedNutrients": { "iron": "lots", "vitaminZ": 12, "zinc": -3, "protein": 25 },
        "recommendedValues": { "iron": 18, "zinc": 11, "protein": 50 }
    });

    let response = AxumTestRequest::post("/api/analysis/nutrients")
        .json(&body)
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let analysis = body["nutrientAnalysis"].as_object().unwrap();
    assert_eq!(analysis.len(), 3);
    assert_eq!(analysis["iron"]["consumed"], 0.0);
    assert_eq!(analysis["zinc"]["consumed"], 0.0);
    assert_eq!(analysis["protein"]["percentage"], 50);
}

#[tokio::test]
async fn test_analyze_rejects_non_positive_target_calories() {
    let body = json!({ "consumedNutrients": {}, "targetCalories": 0 });

    let response = AxumTestRequest::post("/api/analysis/nutrients")
        .json(&body)
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_analyze_rejects_malformed_json() {
    let response = AxumTestRequest::post("/api/analysis/nutrients")
        .raw_json("{ not json")
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

// ============================================================================
// POST /api/analysis/recommendations
// ============================================================================

#[tokio::test]
async fn test_recommend_iron_deficiency() {
    let response = AxumTestRequest::post("/api/analysis/recommendations")
        .json(&iron_deficient_body())
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 1);

    let iron = &recommendations[0];
    assert_eq!(iron["nutrient"], "iron");
    assert_eq!(iron["percentage"], 22);
    assert_eq!(iron["severity"], "severe");
    assert!(iron["supplement"]["name"].is_string());
    assert!(iron["supplement"]["dosage"].is_string());
    assert!(iron["supplement"]["importance"].is_string());
    assert!(iron["supplement"]["url"]
        .as_str()
        .unwrap()
        .starts_with("https://"));
}

#[tokio::test]
async fn test_recommend_omits_supplement_when_catalog_has_none() {
    let resources =
        common::resources_with(SupplementCatalog::empty(), SeverityEligibility::BelowGood);
    let body = analysis_body(&[], &[("vitaminD", 20.0)]);

    let response = AxumTestRequest::post("/api/analysis/recommendations")
        .json(&body)
        .send(AnalysisRoutes::routes(resources))
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let vitamin_d = &body["recommendations"][0];
    assert_eq!(vitamin_d["nutrient"], "vitaminD");
    assert_eq!(vitamin_d["severity"], "severe");
    assert!(vitamin_d.get("supplement").is_none());
}

#[tokio::test]
async fn test_recommend_well_fed_snapshot_is_empty_list() {
    let body = analysis_body(
        &[("protein", 60.0), ("iron", 20.0)],
        &[("protein", 50.0), ("iron", 18.0)],
    );

    let response = AxumTestRequest::post("/api/analysis/recommendations")
        .json(&body)
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["recommendations"], json!([]));
}

#[tokio::test]
async fn test_recommend_below_met_policy_reports_mild() {
    let resources =
        common::resources_with(SupplementCatalog::builtin(), SeverityEligibility::BelowMet);
    let body = analysis_body(&[("protein", 40.0)], &[("protein", 50.0)]);

    let response = AxumTestRequest::post("/api/analysis/recommendations")
        .json(&body)
        .send(AnalysisRoutes::routes(resources))
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["recommendations"][0]["severity"], "mild");
}

#[tokio::test]
async fn test_zero_recommendation_is_generic_server_error() {
    let body = analysis_body(&[("iron", 4.0)], &[("iron", 18.0), ("zinc", 0.0)]);

    let response = AxumTestRequest::post("/api/analysis/recommendations")
        .json(&body)
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 500);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFIG_INVALID");
    assert_eq!(body["error"]["message"], "Configuration is invalid");
    assert!(body.get("recommendations").is_none());
    assert!(!body.to_string().contains("zinc"));
}

#[tokio::test]
async fn test_unknown_recommended_key_is_server_error() {
    let body = analysis_body(&[], &[("vitaminZ", 5.0)]);

    let response = AxumTestRequest::post("/api/analysis/recommendations")
        .json(&body)
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 500);
}

// ============================================================================
// GET /api/nutrients
// ============================================================================

#[tokio::test]
async fn test_nutrient_catalog_lists_units_and_labels() {
    let response = AxumTestRequest::get("/api/nutrients")
        .send(analysis_routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let nutrients = body["nutrients"].as_array().unwrap();
    assert_eq!(nutrients.len(), 23);
    assert_eq!(nutrients[0]["key"], "calories");

    let b12 = nutrients
        .iter()
        .find(|n| n["key"] == "vitaminB12")
        .unwrap();
    assert_eq!(b12["displayName"], "Vitamin B12");
    assert_eq!(b12["unit"], "mcg");
    assert_eq!(b12["category"], "vitamin");
    assert_eq!(b12["defaultRecommended"], 2.4);
}

// ============================================================================
// Full router: request IDs
// ============================================================================

#[tokio::test]
async fn test_full_router_generates_request_id() {
    let app = routes::router(common::default_resources());

    let response = AxumTestRequest::post("/api/analysis/nutrients")
        .json(&json!({}))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);

    let request_id = response.header("x-request-id").unwrap();
    assert!(request_id.starts_with("req_"));
}

#[tokio::test]
async fn test_full_router_echoes_request_id_in_error_body() {
    let app = routes::router(common::default_resources());

    let response = AxumTestRequest::post("/api/analysis/recommendations")
        .header("x-request-id", "req_test123")
        .json(&json!({ "targetCalories": -1 }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("req_test123")
    );

    let body: Value = response.json();
    assert_eq!(body["error"]["request_id"], "req_test123");
}
