// ABOUTME: Nutrigap CLI - offline nutrient gap analysis of request files
// ABOUTME: Runs the same analysis service as the HTTP server against local JSON inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Per-nutrient status for one day of intake
//! nutrigap-cli analyze day.json
//!
//! # Personalised calorie target
//! nutrigap-cli analyze day.json --target-calories 2400
//!
//! # Ranked supplement suggestions for several days at once
//! nutrigap-cli recommend monday.json tuesday.json wednesday.json
//!
//! # Machine-readable output
//! nutrigap-cli recommend day.json --json
//!
//! # Units, labels, and default targets
//! nutrigap-cli nutrients
//! ```
//!
//! Input files use the HTTP request body format:
//! `{"consumedNutrients": {...}, "recommendedValues": {...}, "targetCalories": 2000}`.
//! Pass `-` to read a single request from stdin.

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrigap_server::{
    config::ServerConfig, logging::LoggingConfig, resources::ServerResources,
    services::AnalysisService,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrigap-cli",
    about = "Nutrient gap analysis CLI",
    long_about = "Analyse daily nutrient intake files and suggest supplements for the largest gaps."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Nutrient profile JSON replacing the built-in daily values
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Supplement catalog JSON replacing the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging (written to stderr)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the status of every tracked nutrient
    Analyze {
        /// Request file (`-` for stdin)
        input: PathBuf,

        /// Personalised calorie target, overriding the file
        #[arg(long)]
        target_calories: Option<f64>,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank deficiencies and suggest supplements
    Recommend {
        /// One or more request files, analysed in parallel
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List tracked nutrients with units and default targets
    Nutrients {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init_stderr()?;

    let mut config = ServerConfig::from_env()?;
    if cli.profile.is_some() {
        config.nutrient_profile_path = cli.profile;
    }
    if cli.catalog.is_some() {
        config.supplement_catalog_path = cli.catalog;
    }

    let resources = Arc::new(ServerResources::from_config(config)?);
    debug!(
        supplements = resources.catalog.len(),
        "Analysis resources loaded"
    );
    let service = AnalysisService::new(resources);

    match cli.command {
        Command::Analyze {
            input,
            target_calories,
            json,
        } => commands::analysis::analyze(&service, &input, target_calories, json),
        Command::Recommend { inputs, json } => {
            commands::analysis::recommend(&service, &inputs, json)
        }
        Command::Nutrients { json } => commands::catalog::list(&service, json),
    }
}
