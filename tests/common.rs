// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup and canonical products and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutrilens`
//!
//! Each integration test binary includes this module with `mod common;`,
//! so helpers unused by one binary are expected.

use nutrilens::intelligence::IntelligenceConfig;
use nutrilens::models::{FoodAnalysisInput, IngredientRecord, NutrientProfile, UserHealthProfile};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default stays quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default validated configuration
pub fn default_config() -> IntelligenceConfig {
    IntelligenceConfig::default()
}

/// Nutrient profile with every axis declared
pub fn nutrients(sugar_g: f64, sodium_mg: f64, fat_g: f64, fiber_g: f64) -> NutrientProfile {
    NutrientProfile {
        sugar_g,
        sodium_mg,
        fat_g,
        fiber_g,
        protein_g: 0.0,
        calories_kcal: None,
    }
}

/// Cured meat with a Group 1 carcinogen at a high risk score
pub fn cured_meat_input() -> FoodAnalysisInput {
    FoodAnalysisInput::new(
        vec![IngredientRecord::warning("Sodium Nitrite", 90).with_e_number("E250")],
        NutrientProfile::unknown(),
    )
    .with_product_name("Smoked Ham")
}

/// Whole-food oat product with a green fiber rating
pub fn oat_fiber_input() -> FoodAnalysisInput {
    FoodAnalysisInput::new(
        vec![IngredientRecord::safe("Oat Fiber", 5)],
        NutrientProfile {
            fiber_g: 10.0,
            ..NutrientProfile::unknown()
        },
    )
    .with_product_name("Oat Fiber")
}

/// Ultra-processed snack with several additives and concerning ingredients
pub fn snack_input() -> FoodAnalysisInput {
    FoodAnalysisInput::new(
        vec![
            IngredientRecord::safe("Wheat Flour", 10),
            IngredientRecord::warning("Glucose Syrup", 70),
            IngredientRecord::warning("Palm Shortening", 75),
            IngredientRecord::warning("Salt", 40),
            IngredientRecord::warning("Emulsifier (E471)", 50),
            IngredientRecord::warning("Tartrazine", 85),
            IngredientRecord::warning("Flavouring", 45),
        ],
        nutrients(28.0, 750.0, 9.0, 1.5),
    )
    .with_product_name("Cheesy Puffs")
}

/// Profile selecting nothing
pub fn empty_profile() -> UserHealthProfile {
    UserHealthProfile::new()
}
