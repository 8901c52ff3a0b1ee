// ABOUTME: Core types and constants for the nutrient gap analysis platform
// ABOUTME: Foundation crate with error handling, nutrient models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrigap Core
//!
//! Foundation crate providing shared types and constants for nutrient gap
//! analysis. This crate changes infrequently, so the engine and the server
//! crates can compile against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Thresholds, defaults, and environment variable names
//! - **models**: Nutrient keys, units, categories, and analysis result types
//! - **formatters**: Display-name formatting for compact nutrient keys

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrient and analysis data models
pub mod models;

/// Human-readable labels for nutrient keys
pub mod formatters;
