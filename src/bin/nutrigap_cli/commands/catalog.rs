// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Nutrient catalog command for nutrigap-cli
// ABOUTME: Lists tracked nutrients with units, categories, and default targets

use crate::helpers::display::display_nutrients;
use anyhow::Result;
use nutrigap_server::services::AnalysisService;

/// Print every tracked nutrient
pub fn list(service: &AnalysisService, json: bool) -> Result<()> {
    let catalog = service.nutrient_catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        display_nutrients(&catalog.nutrients);
    }
    Ok(())
}
