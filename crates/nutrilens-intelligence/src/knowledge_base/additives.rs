// ABOUTME: Additive risk catalog with High/Medium/Low tiers and carcinogenicity tags
// ABOUTME: Lookup by E-number or by case-insensitive keyword, first entry wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use serde::{Deserialize, Serialize};

/// Additive risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditiveRiskLevel {
    /// Strong evidence of harm or regulatory restriction
    High,
    /// Generic functional additives
    Medium,
    /// Widely considered benign
    Low,
}

/// IARC carcinogenicity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CarcinogenGroup {
    /// Carcinogenic to humans
    #[serde(rename = "group_1")]
    Group1,
    /// Probably carcinogenic
    #[serde(rename = "group_2a")]
    Group2A,
    /// Possibly carcinogenic
    #[serde(rename = "group_2b")]
    Group2B,
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdditiveEntry {
    /// Stable identifier
    pub id: &'static str,
    /// Risk tier
    pub risk_level: AdditiveRiskLevel,
    /// Lowercase name keywords
    pub keywords: &'static [&'static str],
    /// Normalized E-numbers (`E250`)
    pub e_numbers: &'static [&'static str],
    /// Carcinogenicity tag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carcinogen: Option<CarcinogenGroup>,
}

const fn entry(
    id: &'static str,
    risk_level: AdditiveRiskLevel,
    keywords: &'static [&'static str],
    e_numbers: &'static [&'static str],
) -> AdditiveEntry {
    AdditiveEntry {
        id,
        risk_level,
        keywords,
        e_numbers,
        carcinogen: None,
    }
}

const fn carcinogen(
    id: &'static str,
    keywords: &'static [&'static str],
    e_numbers: &'static [&'static str],
    group: CarcinogenGroup,
) -> AdditiveEntry {
    AdditiveEntry {
        id,
        risk_level: AdditiveRiskLevel::High,
        keywords,
        e_numbers,
        carcinogen: Some(group),
    }
}

use AdditiveRiskLevel::{High, Low, Medium};

/// Additive catalog in match order
///
/// Carcinogen-flagged entries come first so "sodium nitrite" keeps its tag
/// instead of falling through to the generic nitrite entry. Then the
/// remaining High tier, Medium, and Low.
pub static ADDITIVE_CATALOG: &[AdditiveEntry] = &[
    carcinogen(
        "sodium_nitrite",
        &["sodium nitrite"],
        &["E250"],
        CarcinogenGroup::Group1,
    ),
    carcinogen(
        "sodium_benzoate",
        &["sodium benzoate"],
        &["E211"],
        CarcinogenGroup::Group2B,
    ),
    carcinogen("aspartame", &["aspartame"], &["E951"], CarcinogenGroup::Group2B),
    entry(
        "hydrogenated_fat",
        High,
        &["partially hydrogenated", "hydrogenated"],
        &[],
    ),
    entry("trans_fat", High, &["trans fat"], &[]),
    entry(
        "nitrites_nitrates",
        High,
        &["nitrite", "nitrate"],
        &["E249", "E251", "E252"],
    ),
    entry(
        "artificial_colors",
        High,
        &[
            "artificial color",
            "artificial colour",
            "tartrazine",
            "sunset yellow",
            "allura red",
            "ponceau",
            "carmoisine",
        ],
        &["E102", "E110", "E122", "E124", "E129"],
    ),
    entry(
        "synthetic_antioxidants",
        High,
        &["butylated hydroxy", "bha", "bht"],
        &["E320", "E321"],
    ),
    entry("potassium_bromate", High, &["potassium bromate"], &["E924"]),
    entry(
        "preservatives",
        Medium,
        &[
            "preservative",
            "potassium sorbate",
            "sorbic acid",
            "calcium propionate",
            "sulphite",
            "sulfite",
        ],
        &["E200", "E202", "E220", "E282"],
    ),
    entry(
        "sweeteners",
        Medium,
        &["sweetener", "sucralose", "acesulfame", "saccharin"],
        &["E950", "E954", "E955"],
    ),
    entry(
        "flavor_enhancers",
        Medium,
        &["monosodium glutamate", "msg"],
        &["E621"],
    ),
    entry(
        "flavorings",
        Medium,
        &["flavoring", "flavouring", "flavor", "flavour"],
        &[],
    ),
    entry(
        "emulsifiers",
        Medium,
        &["emulsifier", "mono- and diglycerides", "polysorbate"],
        &["E433", "E471"],
    ),
    entry(
        "thickeners",
        Medium,
        &[
            "thickener",
            "stabilizer",
            "stabiliser",
            "carrageenan",
            "modified starch",
        ],
        &["E407", "E1422"],
    ),
    entry(
        "phosphates",
        Medium,
        &["phosphate"],
        &["E338", "E339", "E450", "E451"],
    ),
    entry("maltodextrin", Medium, &["maltodextrin"], &[]),
    entry(
        "acidity_regulators",
        Low,
        &["acidity regulator", "citric acid", "sodium citrate"],
        &["E330", "E331"],
    ),
    entry(
        "vitamin_antioxidants",
        Low,
        &["ascorbic acid", "tocopherol"],
        &["E300", "E306", "E307"],
    ),
    entry("lecithins", Low, &["lecithin"], &["E322"]),
    entry(
        "plant_gums",
        Low,
        &["pectin", "gum"],
        &["E410", "E412", "E414", "E415", "E440"],
    ),
    entry("calcium_carbonate", Low, &["calcium carbonate"], &["E170"]),
];

/// Catalog entry declaring `e_number` (normalized `E250` form)
#[must_use]
pub fn lookup_by_e_number(e_number: &str) -> Option<&'static AdditiveEntry> {
    ADDITIVE_CATALOG
        .iter()
        .find(|entry| entry.e_numbers.iter().any(|code| code.eq_ignore_ascii_case(e_number)))
}

/// First catalog entry with a keyword contained in `name_lower`
#[must_use]
pub fn lookup_by_name(name_lower: &str) -> Option<(&'static AdditiveEntry, &'static str)> {
    ADDITIVE_CATALOG.iter().find_map(|entry| {
        super::first_keyword(name_lower, entry.keywords).map(|keyword| (entry, keyword))
    })
}
