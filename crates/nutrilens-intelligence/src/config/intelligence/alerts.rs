// ABOUTME: Personalized alert configuration: severity aggregation and health goal bands
// ABOUTME: Goal bands are per 100 g and mirror the traffic-light cut-offs where they overlap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use serde::{Deserialize, Serialize};

/// Severity aggregation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Risk score recorded on every allergen alert
    pub allergen_risk_score: u8,
    /// Disease alert count at which severity escalates to danger
    pub danger_disease_alert_count: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            allergen_risk_score: 100,
            danger_disease_alert_count: 3,
        }
    }
}

/// Band for goals where less is better
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitBand {
    /// At or below: good
    pub good_max: f64,
    /// At or below: warning; above: danger
    pub warning_max: f64,
}

/// Band for goals where more is better
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBand {
    /// At or above: good
    pub good_min: f64,
    /// At or above: warning; below: danger
    pub warning_min: f64,
}

/// Per-goal evaluation bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalThresholdsConfig {
    /// Sodium (mg)
    pub low_sodium: LimitBand,
    /// Sugar (g)
    pub low_sugar: LimitBand,
    /// Fiber (g)
    pub high_fiber: TargetBand,
    /// Fat (g)
    pub low_fat: LimitBand,
    /// Protein (g)
    pub high_protein: TargetBand,
    /// Energy (kcal)
    pub weight_control: LimitBand,
    /// Minimum fiber (g) for gut health
    pub gut_health_fiber_min_g: f64,
}

impl Default for GoalThresholdsConfig {
    fn default() -> Self {
        Self {
            low_sodium: LimitBand {
                good_max: 120.0,
                warning_max: 600.0,
            },
            low_sugar: LimitBand {
                good_max: 5.0,
                warning_max: 22.5,
            },
            high_fiber: TargetBand {
                good_min: 6.0,
                warning_min: 3.0,
            },
            low_fat: LimitBand {
                good_max: 3.0,
                warning_max: 17.5,
            },
            high_protein: TargetBand {
                good_min: 10.0,
                warning_min: 5.0,
            },
            weight_control: LimitBand {
                good_max: 150.0,
                warning_max: 400.0,
            },
            gut_health_fiber_min_g: 3.0,
        }
    }
}
