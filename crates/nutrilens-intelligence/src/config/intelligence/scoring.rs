// ABOUTME: Health score configuration: deduction points, caps, bonuses, ceilings, risk bands
// ABOUTME: Every numeric constant the score calculator uses lives here with its default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Health Score Configuration
//!
//! The calculator starts from 100, subtracts weighted additive and
//! concerning-ingredient points, traffic-light penalties and a processing
//! penalty, then adds bonuses. Ceilings cap the result when a flagged
//! carcinogen or a cluster of high-risk additives is present.

use serde::{Deserialize, Serialize};

/// Points per risk level, scaled by position weight before deduction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPoints {
    /// High-risk points
    pub high: f64,
    /// Medium-risk points
    pub medium: f64,
    /// Low-risk points
    pub low: f64,
}

/// Red / amber penalty pair for one traffic-light axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightPenalty {
    /// Points deducted for a red rating
    pub red: f64,
    /// Points deducted for a measured amber rating
    pub amber: f64,
}

/// Traffic-light penalties per axis
///
/// Fiber penalties must stay 0: an undeclared fiber value rates amber
/// without deduction, and validation rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPenaltyConfig {
    /// Sugar axis
    pub sugar: LightPenalty,
    /// Sodium axis
    pub sodium: LightPenalty,
    /// Saturated-fat axis
    pub saturated_fat: LightPenalty,
    /// Fiber axis
    pub fiber: LightPenalty,
}

impl Default for NutritionPenaltyConfig {
    fn default() -> Self {
        Self {
            sugar: LightPenalty {
                red: 10.0,
                amber: 5.0,
            },
            sodium: LightPenalty {
                red: 10.0,
                amber: 5.0,
            },
            saturated_fat: LightPenalty {
                red: 8.0,
                amber: 4.0,
            },
            fiber: LightPenalty {
                red: 0.0,
                amber: 0.0,
            },
        }
    }
}

/// Processing-class penalties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovaPenaltyConfig {
    /// Unprocessed or minimally processed
    pub class_1: f64,
    /// Processed culinary ingredients
    pub class_2: f64,
    /// Processed foods
    pub class_3: f64,
    /// Ultra-processed foods
    pub class_4: f64,
}

impl Default for NovaPenaltyConfig {
    fn default() -> Self {
        Self {
            class_1: 0.0,
            class_2: 3.0,
            class_3: 8.0,
            class_4: 15.0,
        }
    }
}

/// Bonus points per detected positive attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthBonusConfig {
    /// Whole grains
    pub whole_grain: f64,
    /// Olive, avocado, rapeseed and similar oils
    pub healthy_oils: f64,
    /// Omega-3 sources
    pub omega_3: f64,
    /// Fiber-rich ingredients or green fiber rating
    pub high_fiber: f64,
    /// Live cultures
    pub probiotics: f64,
    /// Added vitamins and minerals
    pub micronutrients: f64,
    /// Polyphenol-rich ingredients
    pub antioxidants: f64,
}

impl Default for HealthBonusConfig {
    fn default() -> Self {
        Self {
            whole_grain: 5.0,
            healthy_oils: 3.0,
            omega_3: 4.0,
            high_fiber: 4.0,
            probiotics: 4.0,
            micronutrients: 2.0,
            antioxidants: 3.0,
        }
    }
}

/// Score ceilings imposed by trigger conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCeilingConfig {
    /// Ceiling when a Group 1 carcinogen is present
    pub carcinogen_group_1: f64,
    /// Ceiling when a Group 2A carcinogen is present
    pub carcinogen_group_2a: f64,
    /// Ceiling when a Group 2B carcinogen is present
    pub carcinogen_group_2b: f64,
    /// Number of high-risk additives that triggers the cluster ceiling
    pub high_risk_cluster_count: usize,
    /// Ceiling when the high-risk cluster is present
    pub high_risk_cluster: f64,
}

impl Default for ScoreCeilingConfig {
    fn default() -> Self {
        Self {
            carcinogen_group_1: 35.0,
            carcinogen_group_2a: 50.0,
            carcinogen_group_2b: 65.0,
            high_risk_cluster_count: 3,
            high_risk_cluster: 50.0,
        }
    }
}

/// Complete score calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreConfig {
    /// Points per additive by risk level
    pub additive_points: RiskPoints,
    /// Points per concerning ingredient by risk level
    pub concerning_points: RiskPoints,
    /// Upper bound on the total additive deduction
    pub max_additive_deduction: f64,
    /// Upper bound on the total concerning-ingredient deduction
    pub max_concerning_deduction: f64,
    /// Traffic-light penalties
    pub nutrition_penalties: NutritionPenaltyConfig,
    /// Processing-class penalties
    pub nova_penalties: NovaPenaltyConfig,
    /// Positive attribute bonuses
    pub bonuses: HealthBonusConfig,
    /// Score ceilings
    pub ceilings: ScoreCeilingConfig,
}

impl Default for HealthScoreConfig {
    fn default() -> Self {
        Self {
            additive_points: RiskPoints {
                high: 15.0,
                medium: 8.0,
                low: 3.0,
            },
            concerning_points: RiskPoints {
                high: 10.0,
                medium: 6.0,
                low: 3.0,
            },
            max_additive_deduction: 45.0,
            max_concerning_deduction: 25.0,
            nutrition_penalties: NutritionPenaltyConfig::default(),
            nova_penalties: NovaPenaltyConfig::default(),
            bonuses: HealthBonusConfig::default(),
            ceilings: ScoreCeilingConfig::default(),
        }
    }
}

/// Score-to-band cut-offs
///
/// Two mappings coexist: the risk band used for scoring decisions
/// (80/60) and the display band used for labels (71/31).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBandConfig {
    /// Scores at or above this are low risk
    pub low_risk_min: f64,
    /// Scores at or above this are medium risk
    pub medium_risk_min: f64,
    /// Scores at or above this display as safe
    pub display_safe_min: f64,
    /// Scores at or above this display as moderate
    pub display_moderate_min: f64,
}

impl Default for RiskBandConfig {
    fn default() -> Self {
        Self {
            low_risk_min: 80.0,
            medium_risk_min: 60.0,
            display_safe_min: 71.0,
            display_moderate_min: 31.0,
        }
    }
}
