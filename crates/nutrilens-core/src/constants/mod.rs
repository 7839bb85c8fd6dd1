// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Score bounds, units, and service identifiers shared across NutriLens crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Constants module
//!
//! Tunable thresholds live in `nutrilens_intelligence::config`; the values
//! here are fixed by the data model itself.

/// Score bounds shared by every scoring surface
pub mod score {
    /// Starting score before deductions and bonuses
    pub const BASE_SCORE: f64 = 100.0;
    /// Lowest possible final score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest possible final score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Ingredient risk score and position weight bounds
pub mod risk {
    /// Maximum ingredient risk score supplied by extraction
    pub const MAX_RISK_SCORE: u8 = 100;
    /// Lower bound of the severity multiplier
    pub const MIN_POSITION_WEIGHT: f64 = 0.4;
    /// Upper bound of the severity multiplier
    pub const MAX_POSITION_WEIGHT: f64 = 1.0;
}

/// Measurement units emitted in goal alerts
pub mod units {
    /// Grams
    pub const GRAMS: &str = "g";
    /// Milligrams
    pub const MILLIGRAMS: &str = "mg";
    /// Kilocalories
    pub const KILOCALORIES: &str = "kcal";
    /// Energy density of protein and carbohydrate
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy density of sugar
    pub const KCAL_PER_GRAM_SUGAR: f64 = 4.0;
    /// Energy density of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Context tag recorded on every classified additive
pub mod context_use {
    /// Additives detected on a packaged label are industrial by definition
    pub const INDUSTRIAL: &str = "industrial";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Engine service name
    pub const NUTRILENS_ENGINE: &str = "nutrilens-engine";
    /// Command-line tool name
    pub const NUTRILENS_CLI: &str = "nutrilens-cli";
}
