// ABOUTME: Promotes warning-category ingredients to additive and concerning-ingredient records
// ABOUTME: E-number lookup first, then ordered keyword catalog, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Ingredient / Additive Classifier
//!
//! Only ingredients the extraction step placed in the `warning` category
//! are considered. Each one is checked against two independent tables: the
//! additive catalog and the concerning-ingredient catalog, so a single
//! ingredient ("partially hydrogenated soybean oil") can appear in both
//! output lists.

use crate::knowledge_base::{
    self, additives, AdditiveRiskLevel, CarcinogenGroup, ConcernKind, CONCERN_CATALOG,
};
use nutrilens_core::constants::{context_use, risk};
use nutrilens_core::models::IngredientRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How an additive was resolved against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// E-number in the name or regulatory metadata
    ENumber,
    /// Keyword contained in the name
    Keyword,
}

/// Warning ingredient resolved to an additive catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveRecord {
    /// Ingredient name as declared
    pub name: String,
    /// Matched catalog entry id
    pub catalog_id: String,
    /// Risk tier
    pub risk_level: AdditiveRiskLevel,
    /// Carcinogenicity tag, if the entry carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carcinogen: Option<CarcinogenGroup>,
    /// Resolved E-number, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_number: Option<String>,
    /// Extraction risk score
    pub risk_score: u8,
    /// Severity multiplier in [0.4, 1.0]
    pub position_weight: f64,
    /// Usage context
    pub context_use: String,
    /// How the entry was found
    pub matched_by: MatchSource,
}

/// Warning ingredient matching a concerning-ingredient keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcerningIngredient {
    /// Ingredient name as declared
    pub name: String,
    /// Concern kind
    pub kind: ConcernKind,
    /// Risk tier derived from the kind
    pub risk_level: AdditiveRiskLevel,
    /// Keyword that matched
    pub matched_keyword: String,
    /// Extraction risk score
    pub risk_score: u8,
    /// Severity multiplier in [0.4, 1.0]
    pub position_weight: f64,
}

/// Classifier output for one product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientClassification {
    /// Additives in declaration order
    pub additives: Vec<AdditiveRecord>,
    /// Concerning ingredients in declaration order
    pub concerning_ingredients: Vec<ConcerningIngredient>,
}

impl IngredientClassification {
    /// Number of High-tier additives
    #[must_use]
    pub fn high_risk_additive_count(&self) -> usize {
        self.additives
            .iter()
            .filter(|additive| additive.risk_level == AdditiveRiskLevel::High)
            .count()
    }

    /// Most severe carcinogen tag present, if any
    #[must_use]
    pub fn worst_carcinogen(&self) -> Option<CarcinogenGroup> {
        self.additives
            .iter()
            .filter_map(|additive| additive.carcinogen)
            .min()
    }
}

/// Severity multiplier derived from the extraction risk score
///
/// `clamp(risk_score / 100, 0.4, 1.0)`. Declaration order plays no part.
#[must_use]
pub fn position_weight(risk_score: u8) -> f64 {
    (f64::from(risk_score) / f64::from(risk::MAX_RISK_SCORE))
        .clamp(risk::MIN_POSITION_WEIGHT, risk::MAX_POSITION_WEIGHT)
}

/// Resolve one ingredient against the additive catalog
///
/// Returns `None` for safe-category or unrecognized ingredients.
#[must_use]
pub fn classify_additive(record: &IngredientRecord) -> Option<AdditiveRecord> {
    if !record.is_warning() {
        return None;
    }

    let declared = record
        .declared_e_number()
        .map(knowledge_base::extract_e_numbers)
        .unwrap_or_default();
    let embedded = knowledge_base::extract_e_numbers(&record.name);

    let by_e_number = declared
        .iter()
        .chain(embedded.iter())
        .find_map(|code| additives::lookup_by_e_number(code).map(|entry| (entry, code.clone())));

    let (entry, e_number, matched_by) = if let Some((entry, code)) = by_e_number {
        (entry, Some(code), MatchSource::ENumber)
    } else {
        let name_lower = record.name.to_lowercase();
        let (entry, keyword) = additives::lookup_by_name(&name_lower)?;
        debug!(
            ingredient = %record.name,
            keyword,
            catalog_id = entry.id,
            "Additive matched by keyword"
        );
        let first_declared = declared.into_iter().chain(embedded).next();
        (entry, first_declared, MatchSource::Keyword)
    };

    Some(AdditiveRecord {
        name: record.name.clone(),
        catalog_id: entry.id.to_owned(),
        risk_level: entry.risk_level,
        carcinogen: entry.carcinogen,
        e_number,
        risk_score: record.risk_score,
        position_weight: position_weight(record.risk_score),
        context_use: context_use::INDUSTRIAL.to_owned(),
        matched_by,
    })
}

/// Resolve one ingredient against the concerning-ingredient catalog
#[must_use]
pub fn classify_concern(record: &IngredientRecord) -> Option<ConcerningIngredient> {
    if !record.is_warning() {
        return None;
    }
    let name_lower = record.name.to_lowercase();
    CONCERN_CATALOG.iter().find_map(|entry| {
        knowledge_base::first_keyword(&name_lower, entry.keywords).map(|keyword| {
            ConcerningIngredient {
                name: record.name.clone(),
                kind: entry.kind,
                risk_level: entry.kind.risk_level(),
                matched_keyword: keyword.to_owned(),
                risk_score: record.risk_score,
                position_weight: position_weight(record.risk_score),
            }
        })
    })
}

/// Classify every ingredient of a product
#[must_use]
pub fn classify_ingredients(ingredients: &[IngredientRecord]) -> IngredientClassification {
    let classification = IngredientClassification {
        additives: ingredients.iter().filter_map(classify_additive).collect(),
        concerning_ingredients: ingredients.iter().filter_map(classify_concern).collect(),
    };
    debug!(
        ingredients = ingredients.len(),
        additives = classification.additives.len(),
        concerning = classification.concerning_ingredients.len(),
        "Ingredients classified"
    );
    classification
}
