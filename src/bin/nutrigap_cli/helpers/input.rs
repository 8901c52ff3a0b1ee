// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Request file loading for nutrigap-cli
// ABOUTME: Reads analysis requests from JSON files or stdin

use anyhow::{Context, Result};
use nutrigap_server::services::AnalysisRequest;
use std::fs;
use std::io;
use std::path::Path;

/// Read one analysis request; `-` reads stdin
pub fn read_request(path: &Path) -> Result<AnalysisRequest> {
    let raw = if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("Failed to read request from stdin")?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid analysis request", path.display()))
}
