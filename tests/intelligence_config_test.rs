// ABOUTME: Tests for intelligence configuration defaults, validation, and env overrides
// ABOUTME: Env-mutating tests run serially and clear every variable they set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutrilens::config::{EngineConfig, CACHE_CAPACITY_ENV, DEFAULT_CACHE_CAPACITY};
use nutrilens::errors::{AppError, ErrorCode};
use nutrilens::intelligence::{ConfigError, IntelligenceConfig};
use serial_test::serial;
use std::env;

/// Sets variables for one test and removes them on drop
struct EnvGuard {
    keys: Vec<&'static str>,
}

impl EnvGuard {
    fn set(pairs: &[(&'static str, &str)]) -> Self {
        for (key, value) in pairs {
            env::set_var(key, value);
        }
        Self {
            keys: pairs.iter().map(|(key, _)| *key).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

// ============================================================================
// Defaults and validation
// ============================================================================

#[test]
fn test_defaults_validate() {
    common::init_test_logging();
    let config = IntelligenceConfig::<false>::defaults().validate().unwrap();
    assert_eq!(config, IntelligenceConfig::default());
    assert!((config.scoring.ceilings.carcinogen_group_1 - 35.0).abs() < f64::EPSILON);
    assert!((config.risk_bands.low_risk_min - 80.0).abs() < f64::EPSILON);
    assert_eq!(config.alerts.allergen_risk_score, 100);
}

#[test]
fn test_inverted_traffic_light_limits_rejected() {
    let mut config = IntelligenceConfig::<false>::defaults();
    config.nutrient_thresholds.sugar_green_max_g = 25.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.nutrient_thresholds.fiber_green_min_g = 3.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_negative_points_rejected() {
    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.additive_points.low = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.bonuses.omega_3 = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_fiber_penalties_rejected() {
    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.nutrition_penalties.fiber.red = 4.0;
    config.scoring.nutrition_penalties.fiber.amber = 2.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.nutrition_penalties.fiber.red = 1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_non_finite_thresholds_and_bands_rejected() {
    let mut config = IntelligenceConfig::<false>::defaults();
    config.nutrient_thresholds.sugar_green_max_g = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.nutrient_thresholds.sodium_amber_max_mg = f64::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.risk_bands.low_risk_min = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.goals.low_sugar.warning_max = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_ceiling_constraints() {
    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.ceilings.high_risk_cluster = 120.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.ceilings.carcinogen_group_1 = 70.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.ceilings.high_risk_cluster_count = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_penalty_ordering_constraints() {
    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.nutrition_penalties.sodium.amber = 12.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.scoring.nova_penalties.class_2 = 20.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_band_and_alert_constraints() {
    let mut config = IntelligenceConfig::<false>::defaults();
    config.risk_bands.medium_risk_min = 85.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.alerts.danger_disease_alert_count = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.processing.culinary_max_ingredients = 2;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::<false>::defaults();
    config.goals.low_sodium.good_max = 700.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validated_config_round_trips_through_unvalidated() {
    let mut raw = IntelligenceConfig::default().into_unvalidated();
    raw.scoring.max_additive_deduction = 30.0;
    let config = raw.validate().unwrap();
    assert!((config.scoring.max_additive_deduction - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_error_maps_to_app_error_codes() {
    let invalid: AppError = ConfigError::InvalidRange("x").into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert_eq!(invalid.code.exit_status(), 3);

    let parse: AppError = ConfigError::Parse("Invalid X".to_owned()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config, IntelligenceConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    let _guard = EnvGuard::set(&[
        ("NUTRILENS_SUGAR_GREEN_MAX_G", "3.5"),
        ("NUTRILENS_ADDITIVE_POINTS_HIGH", " 20 "),
        ("NUTRILENS_DANGER_DISEASE_ALERT_COUNT", "5"),
    ]);

    let config = IntelligenceConfig::load().unwrap();
    assert!((config.nutrient_thresholds.sugar_green_max_g - 3.5).abs() < f64::EPSILON);
    assert!((config.scoring.additive_points.high - 20.0).abs() < f64::EPSILON);
    assert_eq!(config.alerts.danger_disease_alert_count, 5);
}

#[test]
#[serial]
fn test_unparsable_env_value_names_variable() {
    let _guard = EnvGuard::set(&[("NUTRILENS_SODIUM_AMBER_MAX_MG", "lots")]);

    match IntelligenceConfig::load() {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("NUTRILENS_SODIUM_AMBER_MAX_MG"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_nan_env_override_rejected() {
    let _guard = EnvGuard::set(&[("NUTRILENS_SUGAR_GREEN_MAX_G", "NaN")]);
    assert!(matches!(
        IntelligenceConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_env_value_is_env_var_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let key = "NUTRILENS_FAT_AMBER_MAX_G";
    env::set_var(key, OsStr::from_bytes(&[0x66, 0x6f, 0x80]));
    let result = IntelligenceConfig::load();
    env::remove_var(key);

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::EnvVar(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_env_override_still_validated() {
    let _guard = EnvGuard::set(&[("NUTRILENS_RISK_BAND_LOW_MIN", "50")]);
    assert!(matches!(
        IntelligenceConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
#[serial]
fn test_engine_config_reads_cache_capacity() {
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);

    let _guard = EnvGuard::set(&[(CACHE_CAPACITY_ENV, "0")]);
    assert_eq!(EngineConfig::from_env().unwrap().cache_capacity, 0);
}

#[test]
#[serial]
fn test_engine_config_rejects_bad_capacity() {
    let _guard = EnvGuard::set(&[(CACHE_CAPACITY_ENV, "-4")]);
    let error = EngineConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains(CACHE_CAPACITY_ENV));
}

#[test]
#[serial]
fn test_engine_config_surfaces_intelligence_errors() {
    let _guard = EnvGuard::set(&[("NUTRILENS_CARCINOGEN_GROUP_1_CEILING", "150")]);
    let error = EngineConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
