// ABOUTME: Environment-based configuration for the report service and CLI
// ABOUTME: Loads cache capacity and validated intelligence settings from NUTRILENS_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use crate::errors::{AppError, AppResult};
use nutrilens_intelligence::IntelligenceConfig;
use std::env;
use tracing::info;

/// Default number of cached reports
pub const DEFAULT_CACHE_CAPACITY: usize = 512;

/// Environment variable holding the cache capacity
pub const CACHE_CAPACITY_ENV: &str = "NUTRILENS_CACHE_CAPACITY";

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum cached reports; zero disables caching
    pub cache_capacity: usize,
    /// Validated scoring and alert configuration
    pub intelligence: IntelligenceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            intelligence: IntelligenceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the intelligence
    /// configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading engine configuration from environment variables");

        let cache_capacity = env_var_or(CACHE_CAPACITY_ENV, &DEFAULT_CACHE_CAPACITY.to_string())
            .trim()
            .parse()
            .map_err(|e| {
                AppError::config(format!("Invalid {CACHE_CAPACITY_ENV} value: {e}"))
            })?;
        let intelligence = IntelligenceConfig::load()?;

        Ok(Self {
            cache_capacity,
            intelligence,
        })
    }

    /// Replace the cache capacity
    #[must_use]
    pub const fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
