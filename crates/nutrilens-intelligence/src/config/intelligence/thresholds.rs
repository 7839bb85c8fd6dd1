// ABOUTME: Traffic-light nutrient thresholds and processing-class ingredient count limits
// ABOUTME: Defaults follow front-of-pack labelling cut-offs per 100 g
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Nutrient rating and processing classification thresholds
//!
//! Sugar, sodium and fat are "limit" axes: lower is better, a value at or
//! below the green limit rates green. Fiber is a "target" axis: a value at
//! or above the green minimum rates green.

use serde::{Deserialize, Serialize};

/// Per-100g traffic-light cut-offs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientThresholdsConfig {
    /// Sugar at or below this is green (g)
    pub sugar_green_max_g: f64,
    /// Sugar at or below this is amber (g)
    pub sugar_amber_max_g: f64,
    /// Sodium at or below this is green (mg)
    pub sodium_green_max_mg: f64,
    /// Sodium at or below this is amber (mg)
    pub sodium_amber_max_mg: f64,
    /// Fat at or below this is green (g)
    pub fat_green_max_g: f64,
    /// Fat at or below this is amber (g)
    pub fat_amber_max_g: f64,
    /// Fiber at or above this is green (g)
    pub fiber_green_min_g: f64,
    /// Fiber at or above this is amber (g)
    pub fiber_amber_min_g: f64,
}

impl Default for NutrientThresholdsConfig {
    fn default() -> Self {
        Self {
            sugar_green_max_g: 5.0,
            sugar_amber_max_g: 22.5,
            sodium_green_max_mg: 120.0,
            sodium_amber_max_mg: 600.0,
            fat_green_max_g: 1.5,
            fat_amber_max_g: 5.0,
            fiber_green_min_g: 6.0,
            fiber_amber_min_g: 3.0,
        }
    }
}

/// Ingredient-count limits used by the processing classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Class 1 requires at most this many ingredients
    pub unprocessed_max_ingredients: usize,
    /// Class 2 requires at most this many ingredients
    pub culinary_max_ingredients: usize,
    /// More ingredients than this forces class 4
    pub ultra_processed_min_exclusive: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            unprocessed_max_ingredients: 3,
            culinary_max_ingredients: 5,
            ultra_processed_min_exclusive: 10,
        }
    }
}
