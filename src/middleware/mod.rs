// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation and CORS configuration for the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// CORS layer configuration
pub mod cors;
/// Request ID generation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::PrefixedRequestId;
