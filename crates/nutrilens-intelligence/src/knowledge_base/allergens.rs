// ABOUTME: Allergen keyword catalog mapping each closed-enum allergen to label terms
// ABOUTME: Used by the alert engine for case-insensitive substring scans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use nutrilens_core::models::Allergen;
use serde::Serialize;

/// Keywords indicating one allergen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllergenEntry {
    /// Allergen tag
    pub allergen: Allergen,
    /// Lowercase label terms
    pub keywords: &'static [&'static str],
}

/// Allergen catalog, one entry per `Allergen` variant in enum order
pub static ALLERGEN_CATALOG: &[AllergenEntry] = &[
    AllergenEntry {
        allergen: Allergen::Peanuts,
        keywords: &["peanut", "groundnut", "arachis"],
    },
    AllergenEntry {
        allergen: Allergen::TreeNuts,
        keywords: &[
            "almond",
            "cashew",
            "walnut",
            "pecan",
            "hazelnut",
            "pistachio",
            "macadamia",
            "brazil nut",
        ],
    },
    AllergenEntry {
        allergen: Allergen::Milk,
        keywords: &[
            "milk", "dairy", "lactose", "whey", "casein", "butter", "cream", "cheese", "yogurt",
            "yoghurt",
        ],
    },
    AllergenEntry {
        allergen: Allergen::Eggs,
        keywords: &["egg", "albumin", "mayonnaise"],
    },
    AllergenEntry {
        allergen: Allergen::Wheat,
        keywords: &["wheat", "gluten", "flour", "semolina", "spelt", "durum"],
    },
    AllergenEntry {
        allergen: Allergen::Soy,
        keywords: &["soy", "soya", "soybean", "tofu", "edamame"],
    },
    AllergenEntry {
        allergen: Allergen::Fish,
        keywords: &["fish", "anchovy", "salmon", "tuna", "cod", "sardine"],
    },
    AllergenEntry {
        allergen: Allergen::Shellfish,
        keywords: &[
            "shellfish", "shrimp", "prawn", "crab", "lobster", "clam", "oyster", "mussel",
            "scallop",
        ],
    },
    AllergenEntry {
        allergen: Allergen::Sesame,
        keywords: &["sesame", "tahini"],
    },
];

/// Keywords for one allergen
#[must_use]
pub fn keywords_for(allergen: Allergen) -> &'static [&'static str] {
    ALLERGEN_CATALOG
        .iter()
        .find(|entry| entry.allergen == allergen)
        .map(|entry| entry.keywords)
        .unwrap_or_default()
}
