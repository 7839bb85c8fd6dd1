// ABOUTME: User health profile models used for personalized alerts
// ABOUTME: Closed Disease, Allergen, HealthGoal enums plus free-text custom entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Disease conditions with a curated avoid-keyword table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disease {
    /// Type 1 or type 2 diabetes
    Diabetes,
    /// High blood pressure
    Hypertension,
    /// Cardiovascular disease
    #[serde(alias = "heart_disease")]
    HeartDisease,
    /// Chronic kidney disease
    #[serde(alias = "kidney_disease")]
    KidneyDisease,
    /// Fatty liver and other liver disease
    #[serde(alias = "liver_disease")]
    LiverDisease,
    /// Elevated LDL cholesterol
    #[serde(alias = "high_cholesterol")]
    HighCholesterol,
    /// Gout / hyperuricemia
    Gout,
    /// Celiac disease
    #[serde(alias = "celiac_disease")]
    CeliacDisease,
    /// Irritable bowel syndrome
    Ibs,
    /// Obesity
    Obesity,
}

impl Disease {
    /// Every disease in catalog order
    pub const ALL: [Self; 10] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::HeartDisease,
        Self::KidneyDisease,
        Self::LiverDisease,
        Self::HighCholesterol,
        Self::Gout,
        Self::CeliacDisease,
        Self::Ibs,
        Self::Obesity,
    ];

    /// Stable language-neutral identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::HeartDisease => "heart_disease",
            Self::KidneyDisease => "kidney_disease",
            Self::LiverDisease => "liver_disease",
            Self::HighCholesterol => "high_cholesterol",
            Self::Gout => "gout",
            Self::CeliacDisease => "celiac_disease",
            Self::Ibs => "ibs",
            Self::Obesity => "obesity",
        }
    }
}

/// Allergens with a curated keyword table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Allergen {
    /// Peanuts and groundnut derivatives
    Peanuts,
    /// Tree nuts
    #[serde(alias = "tree_nuts")]
    TreeNuts,
    /// Milk and dairy proteins
    Milk,
    /// Eggs
    Eggs,
    /// Wheat and gluten
    Wheat,
    /// Soy
    Soy,
    /// Fish
    Fish,
    /// Crustaceans and molluscs
    Shellfish,
    /// Sesame
    Sesame,
}

impl Allergen {
    /// Every allergen in catalog order
    pub const ALL: [Self; 9] = [
        Self::Peanuts,
        Self::TreeNuts,
        Self::Milk,
        Self::Eggs,
        Self::Wheat,
        Self::Soy,
        Self::Fish,
        Self::Shellfish,
        Self::Sesame,
    ];

    /// Stable language-neutral identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Peanuts => "peanuts",
            Self::TreeNuts => "tree_nuts",
            Self::Milk => "milk",
            Self::Eggs => "eggs",
            Self::Wheat => "wheat",
            Self::Soy => "soy",
            Self::Fish => "fish",
            Self::Shellfish => "shellfish",
            Self::Sesame => "sesame",
        }
    }
}

/// Dietary goals evaluated against the nutrient profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    /// Keep sodium intake down
    #[serde(alias = "low_sodium")]
    LowSodium,
    /// Keep sugar intake down
    #[serde(alias = "low_sugar")]
    LowSugar,
    /// Prefer fiber-rich products
    #[serde(alias = "high_fiber")]
    HighFiber,
    /// Keep fat intake down
    #[serde(alias = "low_fat")]
    LowFat,
    /// Prefer protein-rich products
    #[serde(alias = "high_protein")]
    HighProtein,
    /// Keep energy density down
    #[serde(alias = "weight_control")]
    WeightControl,
    /// Support digestive health
    #[serde(alias = "gut_health")]
    GutHealth,
}

impl HealthGoal {
    /// Every goal in catalog order
    pub const ALL: [Self; 7] = [
        Self::LowSodium,
        Self::LowSugar,
        Self::HighFiber,
        Self::LowFat,
        Self::HighProtein,
        Self::WeightControl,
        Self::GutHealth,
    ];

    /// Stable language-neutral identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::LowSodium => "low_sodium",
            Self::LowSugar => "low_sugar",
            Self::HighFiber => "high_fiber",
            Self::LowFat => "low_fat",
            Self::HighProtein => "high_protein",
            Self::WeightControl => "weight_control",
            Self::GutHealth => "gut_health",
        }
    }
}

/// One user's health profile
///
/// Tag sets are ordered so the serialized form is canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserHealthProfile {
    /// Selected catalog diseases
    pub diseases: BTreeSet<Disease>,
    /// Free-text diseases outside the catalog
    pub custom_diseases: Vec<String>,
    /// Selected catalog allergens
    pub allergens: BTreeSet<Allergen>,
    /// Free-text allergens outside the catalog
    pub custom_allergens: Vec<String>,
    /// Selected dietary goals
    pub goals: BTreeSet<HealthGoal>,
}

impl UserHealthProfile {
    /// Empty profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a catalog disease
    #[must_use]
    pub fn with_disease(mut self, disease: Disease) -> Self {
        self.diseases.insert(disease);
        self
    }

    /// Add a free-text disease
    #[must_use]
    pub fn with_custom_disease(mut self, label: impl Into<String>) -> Self {
        self.custom_diseases.push(label.into());
        self
    }

    /// Select a catalog allergen
    #[must_use]
    pub fn with_allergen(mut self, allergen: Allergen) -> Self {
        self.allergens.insert(allergen);
        self
    }

    /// Add a free-text allergen
    #[must_use]
    pub fn with_custom_allergen(mut self, label: impl Into<String>) -> Self {
        self.custom_allergens.push(label.into());
        self
    }

    /// Select a dietary goal
    #[must_use]
    pub fn with_goal(mut self, goal: HealthGoal) -> Self {
        self.goals.insert(goal);
        self
    }
}
