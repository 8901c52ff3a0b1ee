// ABOUTME: Configuration module for the analysis service
// ABOUTME: Environment-only configuration; engine settings live in nutrigap-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Process configuration loaded from environment variables
pub mod environment;

pub use environment::{Environment, ServerConfig};
