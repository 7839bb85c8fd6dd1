// ABOUTME: Food label intelligence: knowledge base, classifiers, health score, and alerts
// ABOUTME: Pure synchronous engine with typed, validated configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

#![deny(unsafe_code)]

//! # NutriLens Intelligence
//!
//! Turns a scanned product (`FoodAnalysisInput`) into a 0-100 health score
//! with an itemized breakdown, and a user's health profile into
//! personalized alerts. Every function is pure: no I/O, no shared mutable
//! state, configuration passed by reference.
//!
//! ## Pipeline
//!
//! 1. [`ingredient_classifier`] promotes warning ingredients to additives
//!    and concerning ingredients
//! 2. [`nutrient_rating`] rates sugar, sodium, fat and fiber
//! 3. [`processing_classifier`] assigns a processing class 1-4
//! 4. [`health_score`] combines them into a [`health_score::ScoreBreakdown`]
//! 5. [`alert_engine`] matches the product against a profile
//!
//! [`analyzer::FoodAnalyzer`] runs the whole pipeline.

/// Typed configuration with environment overrides
pub mod config;

/// Static additive, allergen, disease, and keyword catalogs
pub mod knowledge_base;

/// Warning ingredient to additive / concerning-ingredient promotion
pub mod ingredient_classifier;

/// Traffic-light nutrient ratings
pub mod nutrient_rating;

/// Processing class inference
pub mod processing_classifier;

/// Health score calculator and band mappings
pub mod health_score;

/// Personalized disease, allergen, and goal alerts
pub mod alert_engine;

/// End-to-end analysis pipeline
pub mod analyzer;

pub use alert_engine::{AlertSeverity, SmartHealthAlert};
pub use analyzer::{FoodAnalyzer, ProductAnalysis};
pub use config::{ConfigError, IntelligenceConfig};
pub use health_score::{DisplayBand, RiskBand, ScoreBreakdown};
