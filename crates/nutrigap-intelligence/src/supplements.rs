// ABOUTME: Curated supplement knowledge base keyed by nutrient
// ABOUTME: Read-only after load; a missing entry means "no product suggestion", not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Supplement Knowledge Base
//!
//! At most one curated [`Supplement`] per nutrient. The built-in catalog has
//! no entries for calories, carbs, fat, phosphorus, or sodium: shortfalls in
//! those are better addressed with food than with a pill.

use crate::config::ConfigError;
use nutrigap_core::models::{NutrientKey, Severity, Supplement};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// One catalog record as stored in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Nutrient the supplement addresses
    pub nutrient: NutrientKey,
    /// Supplement metadata
    #[serde(flatten)]
    pub supplement: Supplement,
}

/// Lookup table from nutrient to curated supplement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplementCatalog {
    entries: HashMap<NutrientKey, Supplement>,
}

impl SupplementCatalog {
    /// Catalog with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in curated catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries()
                .into_iter()
                .map(|entry| (entry.nutrient, entry.supplement))
                .collect(),
        }
    }

    /// Build a validated catalog
    ///
    /// # Errors
    ///
    /// Returns an error for a duplicate nutrient, an empty name, or a
    /// purchase link that is not an `https://` URL
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        let mut catalog = HashMap::with_capacity(entries.len());
        for CatalogEntry {
            nutrient,
            supplement,
        } in entries
        {
            if supplement.name.trim().is_empty() {
                return Err(ConfigError::InvalidSupplement {
                    nutrient,
                    reason: "name must not be empty",
                });
            }
            if !supplement.purchase_link.starts_with("https://") {
                return Err(ConfigError::InvalidSupplement {
                    nutrient,
                    reason: "url must start with https://",
                });
            }
            if catalog.insert(nutrient, supplement).is_some() {
                return Err(ConfigError::DuplicateSupplement(nutrient));
            }
        }
        Ok(Self { entries: catalog })
    }

    /// Parse a catalog from a JSON list of entries
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an entry is invalid
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json).map_err(|e| {
            ConfigError::Parse(format!("Invalid supplement catalog: {e}"))
        })?;
        Self::from_entries(entries)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the catalog is invalid
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), entries = catalog.len(), "Loaded supplement catalog");
        Ok(catalog)
    }

    /// Curated supplement for a deficient nutrient
    ///
    /// The severity tier does not change which product is suggested.
    #[must_use]
    pub fn match_supplement(&self, nutrient: NutrientKey, severity: Severity) -> Option<&Supplement> {
        let matched = self.entries.get(&nutrient);
        debug!(
            nutrient = %nutrient,
            severity = severity.as_str(),
            matched = matched.is_some(),
            "Supplement lookup"
        );
        matched
    }

    /// Whether a curated entry exists
    #[must_use]
    pub fn contains(&self, nutrient: NutrientKey) -> bool {
        self.entries.contains_key(&nutrient)
    }

    /// Number of curated entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(
    nutrient: NutrientKey,
    name: &str,
    description: &str,
    dosage: &str,
    importance: &str,
    search: &str,
) -> CatalogEntry {
    CatalogEntry {
        nutrient,
        supplement: Supplement {
            name: name.to_owned(),
            description: description.to_owned(),
            dosage_guidance: dosage.to_owned(),
            importance_note: importance.to_owned(),
            purchase_link: format!("https://www.amazon.com/s?k={search}"),
        },
    }
}

/// Built-in catalog records
#[must_use]
pub fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            NutrientKey::Protein,
            "Whey Protein Isolate",
            "Fast-digesting complete protein powder",
            "20-30 g per serving, 1-2 servings daily",
            "Protein supports muscle repair, immune function, and satiety",
            "whey+protein+isolate",
        ),
        entry(
            NutrientKey::Fiber,
            "Psyllium Husk Fiber",
            "Soluble fiber supplement from psyllium seed husks",
            "5-10 g daily with a full glass of water",
            "Fiber supports digestion and healthy cholesterol levels",
            "psyllium+husk+fiber",
        ),
        entry(
            NutrientKey::VitaminA,
            "Vitamin A (Retinyl Palmitate)",
            "Preformed vitamin A softgels",
            "900 mcg RAE daily; do not exceed 3000 mcg",
            "Vitamin A is essential for vision and immune health",
            "vitamin+a+retinyl+palmitate",
        ),
        entry(
            NutrientKey::VitaminC,
            "Vitamin C (Ascorbic Acid)",
            "Buffered vitamin C tablets",
            "500 mg daily",
            "Vitamin C is an antioxidant that supports collagen formation and iron absorption",
            "vitamin+c+500mg",
        ),
        entry(
            NutrientKey::VitaminD,
            "Vitamin D3 (Cholecalciferol)",
            "Vitamin D3 softgels",
            "1000-2000 IU (25-50 mcg) daily with a meal",
            "Vitamin D supports bone health, calcium absorption, and immune function",
            "vitamin+d3+2000+iu",
        ),
        entry(
            NutrientKey::VitaminE,
            "Vitamin E (Mixed Tocopherols)",
            "Natural vitamin E softgels",
            "15 mg daily",
            "Vitamin E protects cells from oxidative damage",
            "vitamin+e+mixed+tocopherols",
        ),
        entry(
            NutrientKey::VitaminK,
            "Vitamin K2 (MK-7)",
            "Menaquinone-7 capsules",
            "100-120 mcg daily; consult a doctor if taking blood thinners",
            "Vitamin K is needed for blood clotting and bone metabolism",
            "vitamin+k2+mk7",
        ),
        entry(
            NutrientKey::Thiamin,
            "Vitamin B1 (Thiamine)",
            "Thiamine HCl tablets",
            "1.2 mg daily, typically via a B-complex",
            "Thiamin helps convert food into energy and supports nerve function",
            "vitamin+b1+thiamine",
        ),
        entry(
            NutrientKey::Riboflavin,
            "Vitamin B2 (Riboflavin)",
            "Riboflavin tablets",
            "1.3 mg daily, typically via a B-complex",
            "Riboflavin supports energy production and cellular function",
            "vitamin+b2+riboflavin",
        ),
        entry(
            NutrientKey::Niacin,
            "Vitamin B3 (Niacinamide)",
            "Flush-free niacinamide capsules",
            "16 mg daily; avoid high doses without medical advice",
            "Niacin supports metabolism and skin and nerve health",
            "niacinamide",
        ),
        entry(
            NutrientKey::VitaminB6,
            "Vitamin B6 (Pyridoxal-5-Phosphate)",
            "Active form vitamin B6 capsules",
            "1.7 mg daily; do not exceed 100 mg",
            "Vitamin B6 is involved in protein metabolism and neurotransmitter synthesis",
            "vitamin+b6+p5p",
        ),
        entry(
            NutrientKey::VitaminB12,
            "Vitamin B12 (Methylcobalamin)",
            "Sublingual methylcobalamin lozenges",
            "250-1000 mcg daily",
            "Vitamin B12 is essential for red blood cell formation and nerve health",
            "vitamin+b12+methylcobalamin",
        ),
        entry(
            NutrientKey::Calcium,
            "Calcium Citrate",
            "Well-absorbed calcium tablets with vitamin D",
            "500 mg up to twice daily, taken separately from iron",
            "Calcium builds and maintains strong bones and teeth",
            "calcium+citrate",
        ),
        entry(
            NutrientKey::Iron,
            "Iron Bisglycinate",
            "Gentle chelated iron capsules",
            "18 mg daily with vitamin C; avoid taking with calcium",
            "Iron carries oxygen in the blood and prevents fatigue and anemia",
            "iron+bisglycinate",
        ),
        entry(
            NutrientKey::Magnesium,
            "Magnesium Glycinate",
            "Highly absorbable magnesium capsules",
            "200-400 mg daily, preferably in the evening",
            "Magnesium supports muscle and nerve function, sleep, and energy",
            "magnesium+glycinate",
        ),
        entry(
            NutrientKey::Potassium,
            "Potassium Citrate",
            "Potassium citrate capsules",
            "99 mg per capsule; prioritise potassium-rich foods",
            "Potassium regulates fluid balance, blood pressure, and muscle contractions",
            "potassium+citrate",
        ),
        entry(
            NutrientKey::Zinc,
            "Zinc Picolinate",
            "Easily absorbed zinc capsules",
            "15-30 mg daily with food",
            "Zinc supports immune function, wound healing, and protein synthesis",
            "zinc+picolinate",
        ),
        entry(
            NutrientKey::Omega3,
            "Omega-3 Fish Oil",
            "EPA and DHA fish oil softgels",
            "1-2 g combined EPA/DHA daily with meals",
            "Omega-3 fatty acids support heart and brain health",
            "omega+3+fish+oil",
        ),
    ]
}
