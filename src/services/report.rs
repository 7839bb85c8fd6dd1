// ABOUTME: Report service producing score breakdowns and personalized alerts per product
// ABOUTME: Memoizes reports by (product, profile) digest since analysis is a pure function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use crate::cache::{AnalysisCache, CacheKey};
use crate::config::EngineConfig;
use crate::errors::AppResult;
use nutrilens_core::models::{FoodAnalysisInput, UserHealthProfile};
use nutrilens_intelligence::{FoodAnalyzer, ProductAnalysis, SmartHealthAlert};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Full report for one product and optional profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    /// Product name, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Profile-independent analysis
    pub analysis: ProductAnalysis,
    /// Personalized alerts, absent without a profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<SmartHealthAlert>,
}

/// Generates and caches product reports
pub struct ReportService {
    analyzer: FoodAnalyzer,
    cache: AnalysisCache,
}

impl ReportService {
    /// Create a service from configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            cache: AnalysisCache::new(config.cache_capacity),
            analyzer: FoodAnalyzer::new(config.intelligence),
        }
    }

    /// Create a service from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the environment configuration is invalid
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    /// Analyzer in use
    #[must_use]
    pub const fn analyzer(&self) -> &FoodAnalyzer {
        &self.analyzer
    }

    /// Report cache
    #[must_use]
    pub const fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// Build an uncached report
    #[must_use]
    pub fn build_report(
        &self,
        input: &FoodAnalysisInput,
        profile: Option<&UserHealthProfile>,
    ) -> ProductReport {
        ProductReport {
            product_name: input.product_name.clone(),
            analysis: self.analyzer.analyze(input),
            alerts: profile.map(|profile| self.analyzer.personalize(input, profile)),
        }
    }

    /// Report for a product and optional profile, served from cache when possible
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs cannot be serialized into a cache key
    pub fn report(
        &self,
        input: &FoodAnalysisInput,
        profile: Option<&UserHealthProfile>,
    ) -> AppResult<Arc<ProductReport>> {
        if !self.cache.is_enabled() {
            return Ok(Arc::new(self.build_report(input, profile)));
        }

        let key = CacheKey::derive(input, profile)?;
        if let Some(report) = self.cache.get(&key) {
            return Ok(report);
        }

        let report = Arc::new(self.build_report(input, profile));
        info!(
            key = %key,
            final_score = report.analysis.breakdown.final_score,
            personalized = report.alerts.is_some(),
            "Product report generated"
        );
        self.cache.insert(key, Arc::clone(&report));
        Ok(report)
    }
}
