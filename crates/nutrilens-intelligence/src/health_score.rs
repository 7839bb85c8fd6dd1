// ABOUTME: Health score calculator producing a 0-100 score with an itemized breakdown
// ABOUTME: Deductions, bonuses, carcinogen and cluster ceilings, and the two band mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Health Score Calculator
//!
//! ```text
//! raw   = 100 - additive - concerning - nutrition - nova + bonuses
//! final = clamp(raw, 0, ceiling.unwrap_or(100))
//! ```
//!
//! Additive and concerning deductions are `points[risk_level] * position_weight`
//! summed per ingredient and capped. Itemized lists are sorted by name and
//! points before summation so the result does not depend on declaration
//! order, not even in the last bit of the float sum.

use crate::config::intelligence::{
    HealthScoreConfig, LightPenalty, RiskBandConfig, RiskPoints, ScoreCeilingConfig,
};
use crate::ingredient_classifier::IngredientClassification;
use crate::knowledge_base::{
    self, AdditiveRiskLevel, CarcinogenGroup, ConcernKind, HealthBonusKind, BONUS_CATALOG,
};
use crate::nutrient_rating::{AxisRating, TrafficLight, TrafficLightRating};
use crate::processing_classifier::ProcessingClass;
use nutrilens_core::constants::score;
use nutrilens_core::models::IngredientRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// Risk band used for scoring decisions (80 / 60 cut-offs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// Score at or above the low-risk minimum
    Low,
    /// Score at or above the medium-risk minimum
    Medium,
    /// Anything lower
    High,
}

impl RiskBand {
    /// Map a final score to a risk band
    #[must_use]
    pub fn from_score(final_score: f64, bands: &RiskBandConfig) -> Self {
        if final_score >= bands.low_risk_min {
            Self::Low
        } else if final_score >= bands.medium_risk_min {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Display label band (71 / 31 cut-offs), distinct from [`RiskBand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBand {
    /// Shown as safe
    Safe,
    /// Shown as moderate
    Moderate,
    /// Shown as harmful
    Harmful,
}

impl DisplayBand {
    /// Map a final score to a display band
    #[must_use]
    pub fn from_score(final_score: f64, bands: &RiskBandConfig) -> Self {
        if final_score >= bands.display_safe_min {
            Self::Safe
        } else if final_score >= bands.display_moderate_min {
            Self::Moderate
        } else {
            Self::Harmful
        }
    }
}

/// Nutrient axis in the nutrition deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionCategory {
    /// Sugar
    Sugar,
    /// Sodium
    Sodium,
    /// Saturated fat
    SaturatedFat,
    /// Fiber
    Fiber,
}

/// Condition that imposed a score ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorTrigger {
    /// Group 1 carcinogen present
    CarcinogenGroup1,
    /// Group 2A carcinogen present
    CarcinogenGroup2a,
    /// Group 2B carcinogen present
    CarcinogenGroup2b,
    /// Too many High-tier additives
    HighRiskAdditiveCluster,
}

/// Ceiling applied to the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedFloor {
    /// Trigger with the lowest ceiling
    pub trigger: FloorTrigger,
    /// Maximum final score
    pub ceiling: f64,
}

/// One additive's deduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveDeductionItem {
    /// Ingredient name
    pub name: String,
    /// Catalog entry id
    pub catalog_id: String,
    /// Risk tier
    pub risk_level: AdditiveRiskLevel,
    /// Severity multiplier
    pub position_weight: f64,
    /// Points deducted before the cap
    pub points: f64,
}

/// One concerning ingredient's deduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcernDeductionItem {
    /// Ingredient name
    pub name: String,
    /// Concern kind
    pub kind: ConcernKind,
    /// Risk tier
    pub risk_level: AdditiveRiskLevel,
    /// Severity multiplier
    pub position_weight: f64,
    /// Points deducted before the cap
    pub points: f64,
}

/// One nutrient axis penalty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionDeductionItem {
    /// Axis
    pub category: NutritionCategory,
    /// Measured color
    pub light: TrafficLight,
    /// Points deducted
    pub points: f64,
}

/// One awarded bonus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusItem {
    /// Bonus kind
    pub kind: HealthBonusKind,
    /// Points awarded
    pub points: f64,
}

/// Auditable score breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Starting score
    pub base_score: f64,
    /// Capped additive deduction
    pub additive_deduction: f64,
    /// Capped concerning-ingredient deduction
    pub concerning_ingredients_deduction: f64,
    /// Traffic-light deduction
    pub nutrition_deduction: f64,
    /// Processing-class deduction
    pub nova_deduction: f64,
    /// Sum of bonuses
    pub health_bonuses: f64,
    /// Unclamped score
    pub raw_score: f64,
    /// Ceiling, when a trigger fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_floor: Option<AppliedFloor>,
    /// Final score in [0, 100]
    pub final_score: f64,
    /// Per-additive detail, canonical order
    pub additive_items: Vec<AdditiveDeductionItem>,
    /// Per-concern detail, canonical order
    pub concerning_items: Vec<ConcernDeductionItem>,
    /// Per-axis detail
    pub nutrition_items: Vec<NutritionDeductionItem>,
    /// Per-bonus detail
    pub bonus_items: Vec<BonusItem>,
}

impl ScoreBreakdown {
    /// Total of every deduction
    #[must_use]
    pub fn total_deductions(&self) -> f64 {
        self.additive_deduction
            + self.concerning_ingredients_deduction
            + self.nutrition_deduction
            + self.nova_deduction
    }
}

/// Everything the calculator reads
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    /// Declared ingredients, used for bonus detection
    pub ingredients: &'a [IngredientRecord],
    /// Classifier output
    pub classification: &'a IngredientClassification,
    /// Traffic-light ratings
    pub traffic_lights: &'a TrafficLightRating,
    /// Processing class
    pub processing_class: ProcessingClass,
}

const fn risk_points(points: &RiskPoints, level: AdditiveRiskLevel) -> f64 {
    match level {
        AdditiveRiskLevel::High => points.high,
        AdditiveRiskLevel::Medium => points.medium,
        AdditiveRiskLevel::Low => points.low,
    }
}

fn canonical_order(a_name: &str, a_points: f64, b_name: &str, b_points: f64) -> Ordering {
    a_name
        .cmp(b_name)
        .then_with(|| a_points.total_cmp(&b_points))
}

fn sum_points(points: impl Iterator<Item = f64>) -> f64 {
    points.fold(0.0, |acc, p| acc + p)
}

fn additive_items(
    classification: &IngredientClassification,
    config: &HealthScoreConfig,
) -> Vec<AdditiveDeductionItem> {
    let mut items: Vec<AdditiveDeductionItem> = classification
        .additives
        .iter()
        .map(|additive| AdditiveDeductionItem {
            name: additive.name.clone(),
            catalog_id: additive.catalog_id.clone(),
            risk_level: additive.risk_level,
            position_weight: additive.position_weight,
            points: risk_points(&config.additive_points, additive.risk_level)
                * additive.position_weight,
        })
        .collect();
    items.sort_by(|a, b| canonical_order(&a.name, a.points, &b.name, b.points));
    items
}

fn concern_items(
    classification: &IngredientClassification,
    config: &HealthScoreConfig,
) -> Vec<ConcernDeductionItem> {
    let mut items: Vec<ConcernDeductionItem> = classification
        .concerning_ingredients
        .iter()
        .map(|concern| ConcernDeductionItem {
            name: concern.name.clone(),
            kind: concern.kind,
            risk_level: concern.risk_level,
            position_weight: concern.position_weight,
            points: risk_points(&config.concerning_points, concern.risk_level)
                * concern.position_weight,
        })
        .collect();
    items.sort_by(|a, b| canonical_order(&a.name, a.points, &b.name, b.points));
    items
}

fn nutrition_item(
    category: NutritionCategory,
    rating: AxisRating,
    penalty: LightPenalty,
) -> Option<NutritionDeductionItem> {
    if !rating.known {
        return None;
    }
    let points = match rating.light {
        TrafficLight::Green => return None,
        TrafficLight::Amber => penalty.amber,
        TrafficLight::Red => penalty.red,
    };
    Some(NutritionDeductionItem {
        category,
        light: rating.light,
        points,
    })
}

fn nutrition_items(
    lights: &TrafficLightRating,
    config: &HealthScoreConfig,
) -> Vec<NutritionDeductionItem> {
    let penalties = &config.nutrition_penalties;
    [
        nutrition_item(NutritionCategory::Sugar, lights.sugar, penalties.sugar),
        nutrition_item(NutritionCategory::Sodium, lights.sodium, penalties.sodium),
        nutrition_item(
            NutritionCategory::SaturatedFat,
            lights.saturated_fat,
            penalties.saturated_fat,
        ),
        nutrition_item(NutritionCategory::Fiber, lights.fiber, penalties.fiber),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Penalty for a processing class
#[must_use]
pub const fn nova_penalty(class: ProcessingClass, config: &HealthScoreConfig) -> f64 {
    let nova = &config.nova_penalties;
    match class {
        ProcessingClass::Unprocessed => nova.class_1,
        ProcessingClass::CulinaryIngredient => nova.class_2,
        ProcessingClass::Processed => nova.class_3,
        ProcessingClass::UltraProcessed => nova.class_4,
    }
}

/// Detect positive attributes
///
/// Keywords only count on safe-category ingredients. A measured green
/// fiber rating also earns the high-fiber bonus.
#[must_use]
pub fn detect_bonuses(
    ingredients: &[IngredientRecord],
    traffic_lights: &TrafficLightRating,
) -> BTreeSet<HealthBonusKind> {
    let mut detected: BTreeSet<HealthBonusKind> = ingredients
        .iter()
        .filter(|ingredient| !ingredient.is_warning())
        .flat_map(|ingredient| {
            let name_lower = ingredient.name.to_lowercase();
            BONUS_CATALOG
                .iter()
                .filter(move |entry| knowledge_base::contains_any(&name_lower, entry.keywords))
                .map(|entry| entry.kind)
        })
        .collect();
    if traffic_lights.fiber.is_green() {
        detected.insert(HealthBonusKind::HighFiber);
    }
    detected
}

/// Points for one bonus kind
#[must_use]
pub const fn bonus_points(kind: HealthBonusKind, config: &HealthScoreConfig) -> f64 {
    let bonuses = &config.bonuses;
    match kind {
        HealthBonusKind::WholeGrain => bonuses.whole_grain,
        HealthBonusKind::HealthyOils => bonuses.healthy_oils,
        HealthBonusKind::Omega3 => bonuses.omega_3,
        HealthBonusKind::HighFiber => bonuses.high_fiber,
        HealthBonusKind::Probiotics => bonuses.probiotics,
        HealthBonusKind::Micronutrients => bonuses.micronutrients,
        HealthBonusKind::Antioxidants => bonuses.antioxidants,
    }
}

/// Lowest ceiling among triggered conditions
#[must_use]
pub fn applicable_floor(
    classification: &IngredientClassification,
    ceilings: &ScoreCeilingConfig,
) -> Option<AppliedFloor> {
    let carcinogen = classification.worst_carcinogen().map(|group| match group {
        CarcinogenGroup::Group1 => AppliedFloor {
            trigger: FloorTrigger::CarcinogenGroup1,
            ceiling: ceilings.carcinogen_group_1,
        },
        CarcinogenGroup::Group2A => AppliedFloor {
            trigger: FloorTrigger::CarcinogenGroup2a,
            ceiling: ceilings.carcinogen_group_2a,
        },
        CarcinogenGroup::Group2B => AppliedFloor {
            trigger: FloorTrigger::CarcinogenGroup2b,
            ceiling: ceilings.carcinogen_group_2b,
        },
    });
    let cluster = (classification.high_risk_additive_count() >= ceilings.high_risk_cluster_count)
        .then_some(AppliedFloor {
            trigger: FloorTrigger::HighRiskAdditiveCluster,
            ceiling: ceilings.high_risk_cluster,
        });

    [carcinogen, cluster]
        .into_iter()
        .flatten()
        .min_by(|a, b| a.ceiling.total_cmp(&b.ceiling))
}

/// Compute the health score
#[must_use]
pub fn calculate_health_score(input: &ScoringInput<'_>, config: &HealthScoreConfig) -> ScoreBreakdown {
    let additive_items = additive_items(input.classification, config);
    let concerning_items = concern_items(input.classification, config);
    let nutrition_items = nutrition_items(input.traffic_lights, config);
    let bonus_items: Vec<BonusItem> = detect_bonuses(input.ingredients, input.traffic_lights)
        .into_iter()
        .map(|kind| BonusItem {
            kind,
            points: bonus_points(kind, config),
        })
        .collect();

    let additive_deduction =
        sum_points(additive_items.iter().map(|item| item.points)).min(config.max_additive_deduction);
    let concerning_ingredients_deduction = sum_points(concerning_items.iter().map(|item| item.points))
        .min(config.max_concerning_deduction);
    let nutrition_deduction = sum_points(nutrition_items.iter().map(|item| item.points));
    let nova_deduction = nova_penalty(input.processing_class, config);
    let health_bonuses = sum_points(bonus_items.iter().map(|item| item.points));

    let raw_score = score::BASE_SCORE
        - additive_deduction
        - concerning_ingredients_deduction
        - nutrition_deduction
        - nova_deduction
        + health_bonuses;

    let applied_floor = applicable_floor(input.classification, &config.ceilings);
    let upper = applied_floor
        .map_or(score::MAX_SCORE, |floor| floor.ceiling.min(score::MAX_SCORE))
        .max(score::MIN_SCORE);
    let final_score = raw_score.clamp(score::MIN_SCORE, upper);

    debug!(
        raw_score,
        final_score,
        floor = ?applied_floor.map(|floor| floor.trigger),
        "Health score calculated"
    );

    ScoreBreakdown {
        base_score: score::BASE_SCORE,
        additive_deduction,
        concerning_ingredients_deduction,
        nutrition_deduction,
        nova_deduction,
        health_bonuses,
        raw_score,
        applied_floor,
        final_score,
        additive_items,
        concerning_items,
        nutrition_items,
        bonus_items,
    }
}
