// ABOUTME: Concerning-ingredient, processing-level, and health bonus keyword tables
// ABOUTME: Lowercase static slices scanned in declaration order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use super::additives::AdditiveRiskLevel;
use serde::{Deserialize, Serialize};

/// Kind of concerning ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernKind {
    /// High-fructose corn syrup and glucose-fructose syrups
    HighFructoseSyrup,
    /// Hydrogenated or partially hydrogenated oils
    HydrogenatedOil,
    /// Refined and invert sugars
    RefinedSugar,
    /// Salt and high-sodium condiments
    HighSodium,
    /// Other added sugars and syrups
    HighSugar,
}

impl ConcernKind {
    /// Risk tier used to weight this concern in the score
    #[must_use]
    pub const fn risk_level(self) -> AdditiveRiskLevel {
        match self {
            Self::HighFructoseSyrup | Self::HydrogenatedOil => AdditiveRiskLevel::High,
            Self::RefinedSugar | Self::HighSodium | Self::HighSugar => AdditiveRiskLevel::Medium,
        }
    }
}

/// Keywords for one concern kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConcernEntry {
    /// Concern kind
    pub kind: ConcernKind,
    /// Lowercase label terms
    pub keywords: &'static [&'static str],
}

/// Concerning-ingredient catalog, most specific kinds first
pub static CONCERN_CATALOG: &[ConcernEntry] = &[
    ConcernEntry {
        kind: ConcernKind::HighFructoseSyrup,
        keywords: &[
            "high fructose",
            "high-fructose",
            "corn syrup",
            "glucose-fructose",
            "glucose syrup",
            "fructose syrup",
        ],
    },
    ConcernEntry {
        kind: ConcernKind::HydrogenatedOil,
        keywords: &[
            "hydrogenated oil",
            "hydrogenated vegetable",
            "partially hydrogenated",
            "shortening",
        ],
    },
    ConcernEntry {
        kind: ConcernKind::RefinedSugar,
        keywords: &["refined sugar", "invert sugar", "white sugar", "cane sugar"],
    },
    ConcernEntry {
        kind: ConcernKind::HighSodium,
        keywords: &["salt", "sodium chloride", "brine", "soy sauce"],
    },
    ConcernEntry {
        kind: ConcernKind::HighSugar,
        keywords: &["sugar", "dextrose", "sucrose", "syrup", "glucose", "fructose"],
    },
];

/// Terms indicating whole, unprocessed foods
pub static UNPROCESSED_KEYWORDS: &[&str] = &[
    "fruit",
    "vegetable",
    "apple",
    "banana",
    "berry",
    "tomato",
    "potato",
    "carrot",
    "oat",
    "rice",
    "bean",
    "lentil",
    "chickpea",
    "pea",
    "nut",
    "seed",
    "egg",
    "milk",
    "fish",
    "meat",
    "chicken",
    "water",
];

/// Processed culinary ingredients
pub static CULINARY_KEYWORDS: &[&str] = &["oil", "salt", "sugar", "vinegar", "honey", "spice"];

/// Industrial preservation methods
pub static PROCESSING_METHOD_KEYWORDS: &[&str] =
    &["canned", "frozen", "dried", "pasteurized", "pasteurised", "salt-cured"];

/// Markers of ultra-processing
pub static ULTRA_PROCESSING_KEYWORDS: &[&str] = &[
    "additive",
    "artificial",
    "colorant",
    "colourant",
    "flavoring",
    "flavouring",
    "preservative",
    "sweetener",
    "emulsifier",
    "thickener",
];

/// Positive attribute earning a score bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBonusKind {
    /// Whole grains
    WholeGrain,
    /// Olive, avocado, rapeseed and similar oils
    HealthyOils,
    /// Omega-3 sources
    Omega3,
    /// Fiber-rich ingredients
    HighFiber,
    /// Live cultures
    Probiotics,
    /// Added vitamins and minerals
    Micronutrients,
    /// Polyphenol-rich ingredients
    Antioxidants,
}

/// Keywords for one bonus kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BonusEntry {
    /// Bonus kind
    pub kind: HealthBonusKind,
    /// Lowercase label terms
    pub keywords: &'static [&'static str],
}

/// Health bonus catalog
pub static BONUS_CATALOG: &[BonusEntry] = &[
    BonusEntry {
        kind: HealthBonusKind::WholeGrain,
        keywords: &[
            "whole grain",
            "wholegrain",
            "whole wheat",
            "wholemeal",
            "oat",
            "brown rice",
            "quinoa",
            "barley",
            "rye",
        ],
    },
    BonusEntry {
        kind: HealthBonusKind::HealthyOils,
        keywords: &[
            "olive oil",
            "avocado oil",
            "rapeseed oil",
            "canola oil",
            "flaxseed oil",
        ],
    },
    BonusEntry {
        kind: HealthBonusKind::Omega3,
        keywords: &[
            "omega-3",
            "omega 3",
            "flaxseed",
            "linseed",
            "chia",
            "salmon",
            "sardine",
            "walnut",
        ],
    },
    BonusEntry {
        kind: HealthBonusKind::HighFiber,
        keywords: &["fiber", "fibre", "inulin", "bran", "psyllium"],
    },
    BonusEntry {
        kind: HealthBonusKind::Probiotics,
        keywords: &[
            "probiotic",
            "lactobacillus",
            "bifidobacterium",
            "live culture",
            "active culture",
            "kefir",
        ],
    },
    BonusEntry {
        kind: HealthBonusKind::Micronutrients,
        keywords: &[
            "vitamin",
            "iron",
            "calcium",
            "zinc",
            "magnesium",
            "folate",
            "folic acid",
        ],
    },
    BonusEntry {
        kind: HealthBonusKind::Antioxidants,
        keywords: &[
            "antioxidant",
            "green tea",
            "berry",
            "berries",
            "cocoa",
            "turmeric",
            "polyphenol",
        ],
    },
];
