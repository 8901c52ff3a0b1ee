// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Integration tests for request ID middleware
//!
//! Tests the request ID layers including:
//! - `req_<uuid>` generation for each request
//! - Propagation of caller-supplied IDs to the response
//! - Request ID availability in handlers via extensions

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header::HeaderName, Request as HttpRequest, StatusCode},
    routing::get,
    Extension, Router,
};
use nutrigap_server::middleware::PrefixedRequestId;
use std::error::Error;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::request_id::{PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn test_handler(Extension(request_id): Extension<RequestId>) -> String {
    format!(
        "Request ID: {}",
        request_id.header_value().to_str().unwrap_or_default()
    )
}

fn app() -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    Router::new().route("/", get(test_handler)).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(header.clone(), PrefixedRequestId))
            .layer(PropagateRequestIdLayer::new(header)),
    )
}

#[tokio::test]
async fn test_request_id_middleware_generates_id() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let request_id_header = response.headers().get(REQUEST_ID_HEADER);
    assert!(request_id_header.is_some(), "Request ID header not present");

    if let Some(header_value) = request_id_header {
        let request_id_str = header_value.to_str()?;
        let uuid_part = request_id_str
            .strip_prefix("req_")
            .ok_or("Request ID is missing the req_ prefix")?;
        assert!(
            Uuid::parse_str(uuid_part).is_ok(),
            "Request ID suffix is not a valid UUID"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_request_id_is_unique_per_request() -> Result<(), Box<dyn Error>> {
    let first = app()
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;
    let second = app()
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_ne!(
        first.headers().get(REQUEST_ID_HEADER),
        second.headers().get(REQUEST_ID_HEADER)
    );
    Ok(())
}

#[tokio::test]
async fn test_caller_request_id_is_preserved() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "trace-from-gateway")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "trace-from-gateway"
    );
    Ok(())
}

#[tokio::test]
async fn test_request_id_available_in_handler() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body_str = String::from_utf8(body.to_vec())?;
    assert!(body_str.starts_with("Request ID: req_"));

    Ok(())
}
