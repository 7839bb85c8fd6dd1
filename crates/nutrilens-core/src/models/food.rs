// ABOUTME: Scanned product models produced by the upstream label extraction step
// ABOUTME: FoodAnalysisInput, IngredientRecord, NutrientProfile, and regulatory metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use serde::{Deserialize, Serialize};

/// Per-100g nutrient totals read from the label
///
/// Every field defaults to zero when absent. Zero means "not declared"
/// to the rating evaluator, never "measured as zero".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientProfile {
    /// Total sugars (grams)
    pub sugar_g: f64,
    /// Sodium (milligrams)
    pub sodium_mg: f64,
    /// Fat, used as the saturated-fat proxy (grams)
    pub fat_g: f64,
    /// Dietary fiber (grams)
    pub fiber_g: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Energy (kcal), when declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_kcal: Option<f64>,
}

impl NutrientProfile {
    /// Profile with every value undeclared
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            sugar_g: 0.0,
            sodium_mg: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
            protein_g: 0.0,
            calories_kcal: None,
        }
    }
}

/// Coarse risk level assigned by extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientRiskLevel {
    /// No known concern
    #[default]
    Safe,
    /// Acceptable in moderation
    Moderate,
    /// Flagged by extraction
    Warning,
}

/// Extraction category; only `Warning` ingredients can become additives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Ordinary food ingredient
    #[default]
    Safe,
    /// Candidate additive or concerning ingredient
    Warning,
}

/// Optional regulatory metadata attached by extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryInfo {
    /// Declared E-number (`E250`, `e-211`, `E 951`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_number: Option<String>,
    /// Free-form regulator note (approval status, usage limit)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_note: Option<String>,
}

/// One declared ingredient, in label order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Ingredient name as read from the label
    pub name: String,
    /// Extraction risk level
    #[serde(default)]
    pub risk_level: IngredientRiskLevel,
    /// Extraction risk score (0-100)
    #[serde(default)]
    pub risk_score: u8,
    /// Extraction category
    #[serde(default)]
    pub category: IngredientCategory,
    /// Regulatory metadata, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory: Option<RegulatoryInfo>,
}

impl IngredientRecord {
    /// Safe-category ingredient with the given risk score
    #[must_use]
    pub fn safe(name: impl Into<String>, risk_score: u8) -> Self {
        Self {
            name: name.into(),
            risk_level: IngredientRiskLevel::Safe,
            risk_score,
            category: IngredientCategory::Safe,
            regulatory: None,
        }
    }

    /// Warning-category ingredient with the given risk score
    #[must_use]
    pub fn warning(name: impl Into<String>, risk_score: u8) -> Self {
        Self {
            name: name.into(),
            risk_level: IngredientRiskLevel::Warning,
            risk_score,
            category: IngredientCategory::Warning,
            regulatory: None,
        }
    }

    /// Attach a declared E-number
    #[must_use]
    pub fn with_e_number(mut self, e_number: impl Into<String>) -> Self {
        self.regulatory
            .get_or_insert_with(RegulatoryInfo::default)
            .e_number = Some(e_number.into());
        self
    }

    /// Whether extraction flagged this ingredient for additive promotion
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.category == IngredientCategory::Warning
    }

    /// Declared E-number, if any
    #[must_use]
    pub fn declared_e_number(&self) -> Option<&str> {
        self.regulatory
            .as_ref()
            .and_then(|info| info.e_number.as_deref())
    }
}

/// Full scan payload handed to the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysisInput {
    /// Declared ingredients in label order
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
    /// Nutrient totals
    #[serde(default)]
    pub nutrients: NutrientProfile,
    /// Product name, when extraction found one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Product type hint (`snack`, `beverage`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

impl FoodAnalysisInput {
    /// Build an input from ingredients and nutrients
    #[must_use]
    pub fn new(ingredients: Vec<IngredientRecord>, nutrients: NutrientProfile) -> Self {
        Self {
            ingredients,
            nutrients,
            product_name: None,
            product_type: None,
        }
    }

    /// Attach a product name
    #[must_use]
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }
}
