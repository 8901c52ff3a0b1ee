// ABOUTME: Main library entry point for the nutrient-gap analysis server
// ABOUTME: Wires configuration, logging, HTTP routes, and the analysis service together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrigap Server
//!
//! HTTP and CLI front ends for the nutrient-gap analysis engine. The engine
//! itself lives in `nutrigap-intelligence`; this crate owns everything around
//! it: environment configuration, structured logging, routing, and process
//! lifecycle.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrigap_server::config::ServerConfig;
//! use nutrigap_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     nutrigap_server::server::run(resources).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: CORS and request IDs
pub mod middleware;

/// Shared, read-only state handed to every request
pub mod resources;

/// HTTP route handlers and router assembly
pub mod routes;

/// Server lifecycle
pub mod server;

/// Service layer between transport and the analysis engine
pub mod services;

pub use nutrigap_core::errors::{AppError, AppResult, ErrorCode};
