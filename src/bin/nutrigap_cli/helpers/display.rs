// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Output formatting helpers for nutrigap-cli
// ABOUTME: Plain-text render policy and table printers for analyses and recommendations

use nutrigap_core::models::{IntakeStatus, NutrientKey, RenderPolicy, Severity};
use nutrigap_intelligence::ProfileEntry;
use nutrigap_server::services::{AnalysisResponse, RecommendationResponse};
use std::path::Path;

/// Terminal labels for status and severity
pub struct TextRenderPolicy;

impl RenderPolicy for TextRenderPolicy {
    type Output = &'static str;

    fn render_status(&self, status: IntakeStatus) -> Self::Output {
        match status {
            IntakeStatus::Met => "MET",
            IntakeStatus::Good => "good",
            IntakeStatus::Low => "low",
            IntakeStatus::Deficient => "DEFICIENT",
        }
    }

    fn render_severity(&self, severity: Severity) -> Self::Output {
        match severity {
            Severity::Severe => "!!! severe",
            Severity::Moderate => "!!  moderate",
            Severity::Mild => "!   mild",
        }
    }
}

fn amount(value: f64, nutrient: NutrientKey) -> String {
    format!("{value:.1} {}", nutrient.unit())
}

/// Print a per-nutrient status table
pub fn display_analysis(
    response: &AnalysisResponse,
    policy: &impl RenderPolicy<Output = &'static str>,
) {
    println!(
        "\nCalories: {:.0} of {:.0} target",
        response.total_calories, response.target_calories
    );
    println!("{}", "=".repeat(72));
    println!(
        "{:<22} {:>14} {:>14} {:>6}  Status",
        "Nutrient", "Consumed", "Target", "%"
    );
    println!("{}", "-".repeat(72));

    for (nutrient, status) in &response.nutrient_analysis {
        println!(
            "{:<22} {:>14} {:>14} {:>5}%  {}",
            nutrient.display_name(),
            amount(status.consumed, *nutrient),
            amount(status.recommended, *nutrient),
            status.percentage,
            policy.render_status(status.status)
        );
    }
}

/// Print ranked recommendations for one input
pub fn display_recommendations(
    source: &Path,
    response: &RecommendationResponse,
    policy: &impl RenderPolicy<Output = &'static str>,
) {
    println!("\n{}", source.display());
    println!("{}", "=".repeat(72));

    if response.recommendations.is_empty() {
        println!("No deficiencies found.");
        return;
    }

    for (rank, recommendation) in response.recommendations.iter().enumerate() {
        let deficiency = &recommendation.deficiency;
        println!(
            "{}. {} ({}%, {} of {})  {}",
            rank + 1,
            deficiency.nutrient.display_name(),
            deficiency.percentage,
            amount(deficiency.consumed, deficiency.nutrient),
            amount(deficiency.recommended, deficiency.nutrient),
            policy.render_severity(deficiency.severity)
        );
        match &recommendation.supplement {
            Some(supplement) => {
                println!("   Supplement: {}", supplement.name);
                println!("   Dosage: {}", supplement.dosage_guidance);
                println!("   Why: {}", supplement.importance_note);
                println!("   Link: {}", supplement.purchase_link);
            }
            None => println!("   No supplement on file; consider dietary sources."),
        }
    }
}

/// Print the nutrient catalog
pub fn display_nutrients(entries: &[ProfileEntry]) {
    println!(
        "\n{:<22} {:<20} {:<15} {:>12}",
        "Nutrient", "Key", "Category", "Default"
    );
    println!("{}", "=".repeat(72));
    for entry in entries {
        let default = format!("{} {}", entry.default_recommended, entry.unit);
        println!(
            "{:<22} {:<20} {:<15} {:>12}",
            entry.display_name,
            entry.key.as_str(),
            entry.category.as_str(),
            default,
        );
    }
}
