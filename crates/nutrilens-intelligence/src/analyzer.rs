// ABOUTME: Food analyzer pipeline wiring classifier, rating, processing, score, and alerts
// ABOUTME: Owns a validated IntelligenceConfig and exposes analyze and personalize
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Food analyzer for scanned products

use crate::alert_engine::{self, SmartHealthAlert};
use crate::config::intelligence::IntelligenceConfig;
use crate::health_score::{self, DisplayBand, RiskBand, ScoreBreakdown, ScoringInput};
use crate::ingredient_classifier::{self, IngredientClassification};
use crate::nutrient_rating::{self, TrafficLightRating};
use crate::processing_classifier::{self, ProcessingAssessment};
use nutrilens_core::models::{FoodAnalysisInput, UserHealthProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Profile-independent analysis of one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAnalysis {
    /// Additives and concerning ingredients
    pub classification: IngredientClassification,
    /// Traffic-light ratings
    pub traffic_lights: TrafficLightRating,
    /// Processing class and the rule that decided it
    pub processing: ProcessingAssessment,
    /// Score breakdown
    pub breakdown: ScoreBreakdown,
    /// Scoring risk band
    pub risk_band: RiskBand,
    /// Display label band
    pub display_band: DisplayBand,
}

/// Main analyzer for scanned food products
#[derive(Debug, Clone, Default)]
pub struct FoodAnalyzer {
    config: IntelligenceConfig,
}

impl FoodAnalyzer {
    /// Create an analyzer with a validated configuration
    #[must_use]
    pub const fn new(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(IntelligenceConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Score a product
    #[must_use]
    pub fn analyze(&self, input: &FoodAnalysisInput) -> ProductAnalysis {
        let classification = ingredient_classifier::classify_ingredients(&input.ingredients);
        let traffic_lights =
            nutrient_rating::rate_nutrients(&input.nutrients, &self.config.nutrient_thresholds);
        let processing =
            processing_classifier::classify_processing(&input.ingredients, &self.config.processing);

        let breakdown = health_score::calculate_health_score(
            &ScoringInput {
                ingredients: &input.ingredients,
                classification: &classification,
                traffic_lights: &traffic_lights,
                processing_class: processing.class,
            },
            &self.config.scoring,
        );
        let risk_band = RiskBand::from_score(breakdown.final_score, &self.config.risk_bands);
        let display_band = DisplayBand::from_score(breakdown.final_score, &self.config.risk_bands);

        debug!(
            product = input.product_name.as_deref().unwrap_or("unnamed"),
            final_score = breakdown.final_score,
            ?risk_band,
            "Product analyzed"
        );

        ProductAnalysis {
            classification,
            traffic_lights,
            processing,
            breakdown,
            risk_band,
            display_band,
        }
    }

    /// Personalized alerts for a product and profile
    #[must_use]
    pub fn personalize(
        &self,
        input: &FoodAnalysisInput,
        profile: &UserHealthProfile,
    ) -> SmartHealthAlert {
        alert_engine::generate_alerts(&input.ingredients, &input.nutrients, profile, &self.config)
    }
}
