// ABOUTME: Per-disease avoid-keyword catalog with localization-ready reason keys
// ABOUTME: Each rule pairs a label keyword with the reason slug emitted on a match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use nutrilens_core::models::Disease;
use serde::Serialize;

/// One avoid-keyword and the reason it matters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseRule {
    /// Lowercase label term
    pub keyword: &'static str,
    /// Reason slug, rendered as `disease.<disease_id>.<reason>`
    pub reason: &'static str,
}

/// Avoid-keywords for one disease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseEntry {
    /// Disease tag
    pub disease: Disease,
    /// Rules in match order
    pub rules: &'static [DiseaseRule],
}

const fn rule(keyword: &'static str, reason: &'static str) -> DiseaseRule {
    DiseaseRule { keyword, reason }
}

/// Disease catalog, one entry per `Disease` variant in enum order
pub static DISEASE_CATALOG: &[DiseaseEntry] = &[
    DiseaseEntry {
        disease: Disease::Diabetes,
        rules: &[
            rule("sugar", "added_sugar"),
            rule("syrup", "added_sugar"),
            rule("glucose", "added_sugar"),
            rule("fructose", "added_sugar"),
            rule("dextrose", "added_sugar"),
            rule("sucrose", "added_sugar"),
            rule("maltose", "added_sugar"),
            rule("honey", "added_sugar"),
            rule("molasses", "added_sugar"),
            rule("maltodextrin", "high_glycemic"),
        ],
    },
    DiseaseEntry {
        disease: Disease::Hypertension,
        rules: &[
            rule("sodium", "sodium"),
            rule("salt", "sodium"),
            rule("monosodium", "sodium"),
            rule("msg", "sodium"),
            rule("soy sauce", "sodium"),
            rule("brine", "sodium"),
        ],
    },
    DiseaseEntry {
        disease: Disease::HeartDisease,
        rules: &[
            rule("hydrogenated", "trans_fat"),
            rule("trans fat", "trans_fat"),
            rule("shortening", "trans_fat"),
            rule("lard", "saturated_fat"),
            rule("palm oil", "saturated_fat"),
            rule("cholesterol", "cholesterol"),
        ],
    },
    DiseaseEntry {
        disease: Disease::KidneyDisease,
        rules: &[
            rule("sodium", "sodium"),
            rule("salt", "sodium"),
            rule("phosphate", "phosphorus"),
            rule("phosphoric acid", "phosphorus"),
            rule("potassium", "potassium"),
        ],
    },
    DiseaseEntry {
        disease: Disease::LiverDisease,
        rules: &[
            rule("high fructose", "fructose"),
            rule("fructose", "fructose"),
            rule("alcohol", "alcohol"),
            rule("hydrogenated", "trans_fat"),
        ],
    },
    DiseaseEntry {
        disease: Disease::HighCholesterol,
        rules: &[
            rule("hydrogenated", "trans_fat"),
            rule("trans fat", "trans_fat"),
            rule("palm oil", "saturated_fat"),
            rule("coconut oil", "saturated_fat"),
            rule("lard", "saturated_fat"),
            rule("butter", "saturated_fat"),
            rule("cream", "saturated_fat"),
            rule("egg yolk", "dietary_cholesterol"),
        ],
    },
    DiseaseEntry {
        disease: Disease::Gout,
        rules: &[
            rule("yeast extract", "purines"),
            rule("anchovy", "purines"),
            rule("sardine", "purines"),
            rule("organ", "purines"),
            rule("liver", "purines"),
            rule("fructose", "fructose"),
            rule("beer", "alcohol"),
            rule("alcohol", "alcohol"),
        ],
    },
    DiseaseEntry {
        disease: Disease::CeliacDisease,
        rules: &[
            rule("wheat", "gluten"),
            rule("barley", "gluten"),
            rule("rye", "gluten"),
            rule("malt", "gluten"),
            rule("gluten", "gluten"),
            rule("spelt", "gluten"),
            rule("semolina", "gluten"),
        ],
    },
    DiseaseEntry {
        disease: Disease::Ibs,
        rules: &[
            rule("sorbitol", "fodmap"),
            rule("mannitol", "fodmap"),
            rule("xylitol", "fodmap"),
            rule("inulin", "fodmap"),
            rule("fructose", "fodmap"),
            rule("garlic", "fodmap"),
            rule("onion", "fodmap"),
            rule("lactose", "fodmap"),
        ],
    },
    DiseaseEntry {
        disease: Disease::Obesity,
        rules: &[
            rule("sugar", "added_sugar"),
            rule("syrup", "added_sugar"),
            rule("fructose", "added_sugar"),
            rule("maltodextrin", "high_glycemic"),
            rule("hydrogenated", "trans_fat"),
            rule("palm oil", "saturated_fat"),
        ],
    },
];

/// Rules for one disease
#[must_use]
pub fn rules_for(disease: Disease) -> &'static [DiseaseRule] {
    DISEASE_CATALOG
        .iter()
        .find(|entry| entry.disease == disease)
        .map(|entry| entry.rules)
        .unwrap_or_default()
}

/// First rule whose keyword is contained in `name_lower`
#[must_use]
pub fn first_matching_rule(disease: Disease, name_lower: &str) -> Option<&'static DiseaseRule> {
    rules_for(disease)
        .iter()
        .find(|rule| name_lower.contains(rule.keyword))
}
