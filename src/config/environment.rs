// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles bind address, port, timeouts, and optional profile/catalog file paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use nutrigap_core::constants::{defaults, env_config, ports};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Process-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: IpAddr,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// JSON nutrient profile replacing the built-in daily values
    pub nutrient_profile_path: Option<PathBuf>,
    /// JSON supplement catalog replacing the built-in catalog
    pub supplement_catalog_path: Option<PathBuf>,
    /// Comma-separated allowed CORS origins (`*` for any)
    pub cors_allowed_origins: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: IpAddr::from([127, 0, 0, 1]),
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            nutrient_profile_path: None,
            supplement_catalog_path: None,
            cors_allowed_origins: "*".into(),
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if
    /// validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or(env_config::HTTP_PORT, &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or(env_config::HOST, defaults::DEFAULT_HOST)
                .parse()
                .context("Invalid HOST value")?,
            request_timeout_secs: env_var_or(
                env_config::REQUEST_TIMEOUT_SECS,
                &defaults::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid NUTRIGAP_REQUEST_TIMEOUT_SECS value")?,
            nutrient_profile_path: optional_path(env_config::NUTRIENT_PROFILE),
            supplement_catalog_path: optional_path(env_config::SUPPLEMENT_CATALOG),
            cors_allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the request timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "NUTRIGAP_REQUEST_TIMEOUT_SECS must be greater than zero"
            ));
        }
        Ok(())
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let describe = |path: &Option<PathBuf>| {
            path.as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string())
        };
        format!(
            "Nutrigap Server Configuration:\n\
             - Bind Address: {}\n\
             - Request Timeout: {}s\n\
             - Nutrient Profile: {}\n\
             - Supplement Catalog: {}\n\
             - CORS Origins: {}\n\
             - Environment: {}",
            self.bind_addr(),
            self.request_timeout_secs,
            describe(&self.nutrient_profile_path),
            describe(&self.supplement_catalog_path),
            self.cors_allowed_origins,
            self.environment,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Path from an environment variable; unset or blank means none
fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
