// ABOUTME: Intelligence configuration container with typestate validation and env overrides
// ABOUTME: Orchestrates rating, processing, scoring, band, alert and goal configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `thresholds` - Traffic-light cut-offs and processing ingredient limits
//! - `scoring` - Deduction points, caps, bonuses, ceilings and risk bands
//! - `alerts` - Severity aggregation and health goal bands
//!
//! `IntelligenceConfig<false>` is a raw configuration; only
//! [`IntelligenceConfig::validate`] produces the validated
//! `IntelligenceConfig<true>` that the analyzer accepts.

pub mod alerts;
pub mod error;
pub mod scoring;
pub mod thresholds;

pub use alerts::{AlertConfig, GoalThresholdsConfig, LimitBand, TargetBand};
pub use error::ConfigError;
pub use scoring::{
    HealthBonusConfig, HealthScoreConfig, LightPenalty, NovaPenaltyConfig,
    NutritionPenaltyConfig, RiskBandConfig, RiskPoints, ScoreCeilingConfig,
};
pub use thresholds::{NutrientThresholdsConfig, ProcessingConfig};

use std::env::{self, VarError};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig<true>> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, PartialEq)]
pub struct IntelligenceConfig<const VALIDATED: bool = true> {
    /// Traffic-light cut-offs
    pub nutrient_thresholds: NutrientThresholdsConfig,
    /// Processing classifier ingredient limits
    pub processing: ProcessingConfig,
    /// Score calculator constants
    pub scoring: HealthScoreConfig,
    /// Score-to-band mappings
    pub risk_bands: RiskBandConfig,
    /// Severity aggregation
    pub alerts: AlertConfig,
    /// Health goal bands
    pub goals: GoalThresholdsConfig,
    _phantom: PhantomData<()>,
}

impl IntelligenceConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus `NUTRILENS_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        IntelligenceConfig::<false>::defaults()
            .apply_env_overrides()?
            .validate()
    }

    /// Drop the validated marker so fields can be edited and re-validated
    #[must_use]
    pub fn into_unvalidated(self) -> IntelligenceConfig<false> {
        IntelligenceConfig {
            nutrient_thresholds: self.nutrient_thresholds,
            processing: self.processing,
            scoring: self.scoring,
            risk_bands: self.risk_bands,
            alerts: self.alerts,
            goals: self.goals,
            _phantom: PhantomData,
        }
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            nutrient_thresholds: NutrientThresholdsConfig::default(),
            processing: ProcessingConfig::default(),
            scoring: HealthScoreConfig::default(),
            risk_bands: RiskBandConfig::default(),
            alerts: AlertConfig::default(),
            goals: GoalThresholdsConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl IntelligenceConfig<false> {
    /// Unvalidated configuration holding the documented defaults
    #[must_use]
    pub fn defaults() -> Self {
        IntelligenceConfig::<true>::default().into_unvalidated()
    }

    /// Validate ordering and range constraints
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when thresholds are out of order
    /// and `ConfigError::ValueOutOfRange` for negative points or ceilings
    /// outside 0-100
    pub fn validate(self) -> Result<IntelligenceConfig<true>, ConfigError> {
        self.validate_thresholds()?;
        self.validate_scoring()?;
        self.validate_bands_and_goals()?;

        Ok(IntelligenceConfig {
            nutrient_thresholds: self.nutrient_thresholds,
            processing: self.processing,
            scoring: self.scoring,
            risk_bands: self.risk_bands,
            alerts: self.alerts,
            goals: self.goals,
            _phantom: PhantomData,
        })
    }

    fn validate_thresholds(&self) -> Result<(), ConfigError> {
        let t = &self.nutrient_thresholds;
        let limits = [
            t.sugar_green_max_g,
            t.sugar_amber_max_g,
            t.sodium_green_max_mg,
            t.sodium_amber_max_mg,
            t.fat_green_max_g,
            t.fat_amber_max_g,
            t.fiber_green_min_g,
            t.fiber_amber_min_g,
        ];
        if limits.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "traffic-light thresholds must be finite and >= 0",
            ));
        }
        if t.sugar_green_max_g >= t.sugar_amber_max_g {
            return Err(ConfigError::InvalidRange(
                "sugar_green_max_g must be < sugar_amber_max_g",
            ));
        }
        if t.sodium_green_max_mg >= t.sodium_amber_max_mg {
            return Err(ConfigError::InvalidRange(
                "sodium_green_max_mg must be < sodium_amber_max_mg",
            ));
        }
        if t.fat_green_max_g >= t.fat_amber_max_g {
            return Err(ConfigError::InvalidRange(
                "fat_green_max_g must be < fat_amber_max_g",
            ));
        }
        if t.fiber_green_min_g <= t.fiber_amber_min_g {
            return Err(ConfigError::InvalidRange(
                "fiber_green_min_g must be > fiber_amber_min_g",
            ));
        }

        let p = &self.processing;
        if p.unprocessed_max_ingredients > p.culinary_max_ingredients
            || p.culinary_max_ingredients > p.ultra_processed_min_exclusive
        {
            return Err(ConfigError::InvalidRange(
                "processing ingredient limits must be non-decreasing",
            ));
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        let penalties = &s.nutrition_penalties;
        let bonuses = &s.bonuses;
        let nova = &s.nova_penalties;

        let non_negative = [
            s.additive_points.high,
            s.additive_points.medium,
            s.additive_points.low,
            s.concerning_points.high,
            s.concerning_points.medium,
            s.concerning_points.low,
            s.max_additive_deduction,
            s.max_concerning_deduction,
            penalties.sugar.red,
            penalties.sugar.amber,
            penalties.sodium.red,
            penalties.sodium.amber,
            penalties.saturated_fat.red,
            penalties.saturated_fat.amber,
            penalties.fiber.red,
            penalties.fiber.amber,
            nova.class_1,
            nova.class_2,
            nova.class_3,
            nova.class_4,
            bonuses.whole_grain,
            bonuses.healthy_oils,
            bonuses.omega_3,
            bonuses.high_fiber,
            bonuses.probiotics,
            bonuses.micronutrients,
            bonuses.antioxidants,
        ];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "scoring points, caps, penalties and bonuses must be finite and >= 0",
            ));
        }

        // undeclared fiber is free, so fiber may only earn the bonus
        if penalties.fiber.red > 0.0 || penalties.fiber.amber > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fiber penalties must be 0; fiber is rewarded through the high-fiber bonus",
            ));
        }

        for (red, amber) in [
            (penalties.sugar.red, penalties.sugar.amber),
            (penalties.sodium.red, penalties.sodium.amber),
            (penalties.saturated_fat.red, penalties.saturated_fat.amber),
            (penalties.fiber.red, penalties.fiber.amber),
        ] {
            if red < amber {
                return Err(ConfigError::InvalidRange(
                    "red penalties must be >= amber penalties",
                ));
            }
        }

        if nova.class_1 > nova.class_2 || nova.class_2 > nova.class_3 || nova.class_3 > nova.class_4
        {
            return Err(ConfigError::InvalidRange(
                "nova penalties must be non-decreasing from class 1 to class 4",
            ));
        }

        let c = &s.ceilings;
        let in_score_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_score_range(c.carcinogen_group_1)
            || !in_score_range(c.carcinogen_group_2a)
            || !in_score_range(c.carcinogen_group_2b)
            || !in_score_range(c.high_risk_cluster)
        {
            return Err(ConfigError::ValueOutOfRange(
                "score ceilings must be between 0 and 100",
            ));
        }
        if c.carcinogen_group_1 > c.carcinogen_group_2a
            || c.carcinogen_group_2a > c.carcinogen_group_2b
        {
            return Err(ConfigError::InvalidRange(
                "carcinogen ceilings must tighten from group 2B to group 1",
            ));
        }
        if c.high_risk_cluster_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "high_risk_cluster_count must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_bands_and_goals(&self) -> Result<(), ConfigError> {
        let b = &self.risk_bands;
        let cut_offs = [
            b.low_risk_min,
            b.medium_risk_min,
            b.display_safe_min,
            b.display_moderate_min,
        ];
        if cut_offs.iter().any(|v| !(0.0..=100.0).contains(v)) {
            return Err(ConfigError::ValueOutOfRange(
                "band cut-offs must be between 0 and 100",
            ));
        }
        if b.medium_risk_min >= b.low_risk_min {
            return Err(ConfigError::InvalidRange(
                "medium_risk_min must be < low_risk_min",
            ));
        }
        if b.display_moderate_min >= b.display_safe_min {
            return Err(ConfigError::InvalidRange(
                "display_moderate_min must be < display_safe_min",
            ));
        }

        if self.alerts.allergen_risk_score > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "allergen_risk_score must be between 0 and 100",
            ));
        }
        if self.alerts.danger_disease_alert_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "danger_disease_alert_count must be at least 1",
            ));
        }

        let g = &self.goals;
        let goal_values = [
            g.low_sodium.good_max,
            g.low_sodium.warning_max,
            g.low_sugar.good_max,
            g.low_sugar.warning_max,
            g.low_fat.good_max,
            g.low_fat.warning_max,
            g.weight_control.good_max,
            g.weight_control.warning_max,
            g.high_fiber.good_min,
            g.high_fiber.warning_min,
            g.high_protein.good_min,
            g.high_protein.warning_min,
            g.gut_health_fiber_min_g,
        ];
        if goal_values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange("goal bands must be finite"));
        }
        for band in [g.low_sodium, g.low_sugar, g.low_fat, g.weight_control] {
            if band.good_max > band.warning_max {
                return Err(ConfigError::InvalidRange(
                    "goal limit bands require good_max <= warning_max",
                ));
            }
        }
        for band in [g.high_fiber, g.high_protein] {
            if band.good_min < band.warning_min {
                return Err(ConfigError::InvalidRange(
                    "goal target bands require good_min >= warning_min",
                ));
            }
        }
        if g.gut_health_fiber_min_g <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "gut_health_fiber_min_g must be positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply `NUTRILENS_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a set variable cannot be parsed and
    /// `ConfigError::EnvVar` if its value is not valid unicode
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Traffic-light thresholds
        let t = &mut self.nutrient_thresholds;
        Self::apply_env_var("NUTRILENS_SUGAR_GREEN_MAX_G", &mut t.sugar_green_max_g)?;
        Self::apply_env_var("NUTRILENS_SUGAR_AMBER_MAX_G", &mut t.sugar_amber_max_g)?;
        Self::apply_env_var("NUTRILENS_SODIUM_GREEN_MAX_MG", &mut t.sodium_green_max_mg)?;
        Self::apply_env_var("NUTRILENS_SODIUM_AMBER_MAX_MG", &mut t.sodium_amber_max_mg)?;
        Self::apply_env_var("NUTRILENS_FAT_GREEN_MAX_G", &mut t.fat_green_max_g)?;
        Self::apply_env_var("NUTRILENS_FAT_AMBER_MAX_G", &mut t.fat_amber_max_g)?;
        Self::apply_env_var("NUTRILENS_FIBER_GREEN_MIN_G", &mut t.fiber_green_min_g)?;
        Self::apply_env_var("NUTRILENS_FIBER_AMBER_MIN_G", &mut t.fiber_amber_min_g)?;

        // Scoring
        let s = &mut self.scoring;
        Self::apply_env_var("NUTRILENS_ADDITIVE_POINTS_HIGH", &mut s.additive_points.high)?;
        Self::apply_env_var(
            "NUTRILENS_ADDITIVE_POINTS_MEDIUM",
            &mut s.additive_points.medium,
        )?;
        Self::apply_env_var("NUTRILENS_ADDITIVE_POINTS_LOW", &mut s.additive_points.low)?;
        Self::apply_env_var(
            "NUTRILENS_MAX_ADDITIVE_DEDUCTION",
            &mut s.max_additive_deduction,
        )?;
        Self::apply_env_var(
            "NUTRILENS_MAX_CONCERNING_DEDUCTION",
            &mut s.max_concerning_deduction,
        )?;
        Self::apply_env_var(
            "NUTRILENS_NOVA_PENALTY_CLASS_4",
            &mut s.nova_penalties.class_4,
        )?;
        Self::apply_env_var(
            "NUTRILENS_CARCINOGEN_GROUP_1_CEILING",
            &mut s.ceilings.carcinogen_group_1,
        )?;

        // Bands
        Self::apply_env_var(
            "NUTRILENS_RISK_BAND_LOW_MIN",
            &mut self.risk_bands.low_risk_min,
        )?;
        Self::apply_env_var(
            "NUTRILENS_RISK_BAND_MEDIUM_MIN",
            &mut self.risk_bands.medium_risk_min,
        )?;

        // Alerts
        Self::apply_env_var(
            "NUTRILENS_ALLERGEN_RISK_SCORE",
            &mut self.alerts.allergen_risk_score,
        )?;
        Self::apply_env_var(
            "NUTRILENS_DANGER_DISEASE_ALERT_COUNT",
            &mut self.alerts.danger_disease_alert_count,
        )?;

        Ok(self)
    }
}
