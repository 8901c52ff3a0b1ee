// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Analysis and recommendation commands for nutrigap-cli
// ABOUTME: Loads request files, runs the analysis service, and prints reports

use crate::helpers::display::{display_analysis, display_recommendations, TextRenderPolicy};
use crate::helpers::input::read_request;
use anyhow::{bail, Result};
use nutrigap_core::errors::{AppError, AppResult, ErrorCode};
use nutrigap_server::services::{AnalysisRequest, AnalysisService, RecommendationResponse};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Per-nutrient status for one request file
pub fn analyze(
    service: &AnalysisService,
    input: &Path,
    target_calories: Option<f64>,
    json: bool,
) -> Result<()> {
    let mut request = read_request(input)?;
    if target_calories.is_some() {
        request.target_calories = target_calories;
    }

    let response = service.analyze(&request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        display_analysis(&response, &TextRenderPolicy);
    }
    Ok(())
}

/// Ranked recommendations for one or more request files
///
/// Every file is reported; the command fails if any of them failed.
pub fn recommend(service: &AnalysisService, inputs: &[PathBuf], json: bool) -> Result<()> {
    let reports = recommend_reports(service, inputs);
    let mut failures = 0_usize;
    let mut report = Vec::with_capacity(reports.len());

    for (path, result) in &reports {
        match result {
            Ok(response) => {
                if json {
                    report.push(json!({
                        "input": path.display().to_string(),
                        "recommendations": response.recommendations,
                    }));
                } else {
                    display_recommendations(path, response, &TextRenderPolicy);
                }
            }
            Err(e) => {
                failures += 1;
                error!(input = %path.display(), error = %e, "Recommendation failed");
                if json {
                    report.push(json!({
                        "input": path.display().to_string(),
                        "error": { "code": e.code, "message": e.user_message() },
                    }));
                } else {
                    eprintln!("{}: {}", path.display(), e.user_message());
                }
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    if failures > 0 {
        bail!("{failures} of {} inputs failed", inputs.len());
    }
    Ok(())
}

/// Read and analyse every file, keeping one outcome per input in order
///
/// Unreadable or malformed files become `INVALID_INPUT` entries; the
/// remaining requests are still composed as one batch.
fn recommend_reports(
    service: &AnalysisService,
    inputs: &[PathBuf],
) -> Vec<(PathBuf, AppResult<RecommendationResponse>)> {
    let loaded: Vec<AppResult<AnalysisRequest>> = inputs
        .iter()
        .map(|path| read_request(path).map_err(|e| AppError::invalid_input(format!("{e:#}"))))
        .collect();

    let requests: Vec<AnalysisRequest> = loaded
        .iter()
        .filter_map(|result| result.as_ref().ok().cloned())
        .collect();
    info!(
        files = inputs.len(),
        readable = requests.len(),
        "Composing recommendations"
    );

    let mut composed = service.recommend_batch(&requests).into_iter();
    inputs
        .iter()
        .cloned()
        .zip(loaded)
        .map(|(path, load)| {
            let outcome = load.and_then(|_| {
                composed.next().unwrap_or_else(|| {
                    Err(AppError::new(
                        ErrorCode::InternalError,
                        "Batch returned fewer results than requests",
                    ))
                })
            });
            (path, outcome)
        })
        .collect()
}
