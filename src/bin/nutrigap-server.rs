// ABOUTME: HTTP server binary for nutrient-gap analysis and supplement recommendations
// ABOUTME: Loads environment configuration, validates knowledge tables, then serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Nutrigap Server Binary
//!
//! Starts the analysis API. Configuration comes from the environment; the
//! nutrient profile and supplement catalog are validated before the listener
//! is bound, so a bad table stops the process instead of failing requests.

use anyhow::Result;
use clap::Parser;
use nutrigap_server::{config::ServerConfig, logging, resources::ServerResources, server};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutrigap-server")]
#[command(about = "Nutrient gap analysis and supplement recommendation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the nutrient profile file
    #[arg(long)]
    nutrient_profile: Option<PathBuf>,

    /// Override the supplement catalog file
    #[arg(long)]
    supplement_catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.nutrient_profile.is_some() {
        config.nutrient_profile_path = args.nutrient_profile;
    }
    if args.supplement_catalog.is_some() {
        config.supplement_catalog_path = args.supplement_catalog;
    }

    logging::init_from_env()?;

    info!("Starting nutrigap server");
    info!("{}", config.summary());

    let resources = match ServerResources::from_config(config) {
        Ok(resources) => Arc::new(resources),
        Err(e) => {
            error!(error = %e, "Refusing to start with invalid analysis configuration");
            return Err(e.into());
        }
    };

    server::run(resources).await
}
