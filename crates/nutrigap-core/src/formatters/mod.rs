// ABOUTME: Presentation-independent string formatting helpers
// ABOUTME: Turns compact camelCase nutrient keys into human-readable labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Format a compact camelCase key as a label
///
/// A space is inserted before every ASCII uppercase letter and the first
/// character is capitalised: `vitaminB12` becomes "Vitamin B12". Works for
/// any camelCase input, not only tracked nutrient keys.
#[must_use]
pub fn format_nutrient_name(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }

    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
