// ABOUTME: NOVA-like processing level classifier from ingredient keywords and count
// ABOUTME: Ordered rules, first match wins, default class 3
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Processing-Level Classifier
//!
//! Rules in precedence order:
//! 1. Unprocessed keyword and at most 3 ingredients: class 1
//! 2. Culinary keyword and at most 5 ingredients: class 2
//! 3. Processing-method keyword: class 3
//! 4. Ultra-processing keyword or E-number, or more than 10 ingredients: class 4
//! 5. Otherwise class 3

use crate::config::intelligence::ProcessingConfig;
use crate::knowledge_base::{self, keywords};
use nutrilens_core::models::IngredientRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Processing class 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ProcessingClass {
    /// Unprocessed or minimally processed
    Unprocessed = 1,
    /// Processed culinary ingredients
    CulinaryIngredient = 2,
    /// Processed foods
    Processed = 3,
    /// Ultra-processed foods
    UltraProcessed = 4,
}

impl ProcessingClass {
    /// Numeric class
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<ProcessingClass> for u8 {
    fn from(class: ProcessingClass) -> Self {
        class.as_u8()
    }
}

impl TryFrom<u8> for ProcessingClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Unprocessed),
            2 => Ok(Self::CulinaryIngredient),
            3 => Ok(Self::Processed),
            4 => Ok(Self::UltraProcessed),
            other => Err(format!("processing class must be 1-4, got {other}")),
        }
    }
}

/// Which rule decided the class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingRule {
    /// Whole food with few ingredients
    UnprocessedKeyword,
    /// Culinary ingredient with few ingredients
    CulinaryKeyword,
    /// Industrial preservation method
    ProcessingMethod,
    /// Ultra-processing marker or E-number
    UltraProcessingKeyword,
    /// Long ingredient list
    IngredientCount,
    /// Nothing matched
    Default,
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingAssessment {
    /// Assigned class
    pub class: ProcessingClass,
    /// Rule that fired
    pub rule: ProcessingRule,
    /// Ingredient count considered
    pub ingredient_count: usize,
}

/// Classify a product's processing level
#[must_use]
pub fn classify_processing(
    ingredients: &[IngredientRecord],
    config: &ProcessingConfig,
) -> ProcessingAssessment {
    let count = ingredients.len();
    let names: Vec<String> = ingredients
        .iter()
        .map(|ingredient| ingredient.name.to_lowercase())
        .collect();
    let any = |table: &[&str]| names.iter().any(|name| knowledge_base::contains_any(name, table));

    let (class, rule) = if count <= config.unprocessed_max_ingredients
        && any(keywords::UNPROCESSED_KEYWORDS)
    {
        (ProcessingClass::Unprocessed, ProcessingRule::UnprocessedKeyword)
    } else if count <= config.culinary_max_ingredients && any(keywords::CULINARY_KEYWORDS) {
        (
            ProcessingClass::CulinaryIngredient,
            ProcessingRule::CulinaryKeyword,
        )
    } else if any(keywords::PROCESSING_METHOD_KEYWORDS) {
        (ProcessingClass::Processed, ProcessingRule::ProcessingMethod)
    } else if any(keywords::ULTRA_PROCESSING_KEYWORDS)
        || names.iter().any(|name| knowledge_base::has_e_number(name))
    {
        (
            ProcessingClass::UltraProcessed,
            ProcessingRule::UltraProcessingKeyword,
        )
    } else if count > config.ultra_processed_min_exclusive {
        (ProcessingClass::UltraProcessed, ProcessingRule::IngredientCount)
    } else {
        (ProcessingClass::Processed, ProcessingRule::Default)
    };

    debug!(class = class.as_u8(), ?rule, count, "Processing level classified");
    ProcessingAssessment {
        class,
        rule,
        ingredient_count: count,
    }
}
