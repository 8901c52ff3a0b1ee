// ABOUTME: Canned analysis request bodies shared by HTTP and service tests
// ABOUTME: Builds camelCase JSON payloads for the analysis endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(dead_code)]

use serde_json::{json, Map, Value};

/// Request body with explicit consumed and recommended tables
pub fn analysis_body(consumed: &[(&str, f64)], recommended: &[(&str, f64)]) -> Value {
    let to_map = |pairs: &[(&str, f64)]| -> Map<String, Value> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), json!(value)))
            .collect()
    };

    json!({
        "consumedNutrients": to_map(consumed),
        "recommendedValues": to_map(recommended),
    })
}

/// The iron-deficient day used throughout the tests
pub fn iron_deficient_body() -> Value {
    analysis_body(&[("iron", 4.0)], &[("iron", 18.0)])
}
