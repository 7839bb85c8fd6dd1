// ABOUTME: Traffic-light nutrient rating evaluator for sugar, sodium, fat, and fiber
// ABOUTME: Undeclared values rate amber and are marked unknown so they never cost points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use crate::config::intelligence::NutrientThresholdsConfig;
use nutrilens_core::models::NutrientProfile;
use serde::{Deserialize, Serialize};

/// Traffic-light color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLight {
    /// Within the healthy range
    Green,
    /// Medium, or not declared
    Amber,
    /// Outside the healthy range
    Red,
}

/// Rating for one nutrient axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRating {
    /// Color
    pub light: TrafficLight,
    /// Whether a usable value was declared
    pub known: bool,
}

impl AxisRating {
    /// Amber rating for an undeclared value
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            light: TrafficLight::Amber,
            known: false,
        }
    }

    const fn measured(light: TrafficLight) -> Self {
        Self { light, known: true }
    }

    /// Measured red
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.known && matches!(self.light, TrafficLight::Red)
    }

    /// Measured green
    #[must_use]
    pub const fn is_green(self) -> bool {
        self.known && matches!(self.light, TrafficLight::Green)
    }
}

/// Ratings for all four axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficLightRating {
    /// Sugar
    pub sugar: AxisRating,
    /// Sodium
    pub sodium: AxisRating,
    /// Fat, as saturated-fat proxy
    pub saturated_fat: AxisRating,
    /// Fiber
    pub fiber: AxisRating,
}

/// Whether a nutrient value counts as declared
///
/// Zero and non-finite values are treated as not declared.
#[must_use]
pub fn is_declared(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Rate a lower-is-better value
#[must_use]
pub fn rate_limit(value: f64, green_max: f64, amber_max: f64) -> AxisRating {
    if !is_declared(value) {
        return AxisRating::unknown();
    }
    let light = if value <= green_max {
        TrafficLight::Green
    } else if value <= amber_max {
        TrafficLight::Amber
    } else {
        TrafficLight::Red
    };
    AxisRating::measured(light)
}

/// Rate a higher-is-better value
#[must_use]
pub fn rate_target(value: f64, green_min: f64, amber_min: f64) -> AxisRating {
    if !is_declared(value) {
        return AxisRating::unknown();
    }
    let light = if value >= green_min {
        TrafficLight::Green
    } else if value >= amber_min {
        TrafficLight::Amber
    } else {
        TrafficLight::Red
    };
    AxisRating::measured(light)
}

/// Rate a nutrient profile
#[must_use]
pub fn rate_nutrients(
    nutrients: &NutrientProfile,
    thresholds: &NutrientThresholdsConfig,
) -> TrafficLightRating {
    TrafficLightRating {
        sugar: rate_limit(
            nutrients.sugar_g,
            thresholds.sugar_green_max_g,
            thresholds.sugar_amber_max_g,
        ),
        sodium: rate_limit(
            nutrients.sodium_mg,
            thresholds.sodium_green_max_mg,
            thresholds.sodium_amber_max_mg,
        ),
        saturated_fat: rate_limit(
            nutrients.fat_g,
            thresholds.fat_green_max_g,
            thresholds.fat_amber_max_g,
        ),
        fiber: rate_target(
            nutrients.fiber_g,
            thresholds.fiber_green_min_g,
            thresholds.fiber_amber_min_g,
        ),
    }
}
