// ABOUTME: Main library entry point for the NutriLens food label analysis engine
// ABOUTME: Logging, configuration, report caching, and the report service over the engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

#![deny(unsafe_code)]

//! # NutriLens
//!
//! Embedding surface for the NutriLens engine. The scoring and alert logic
//! lives in `nutrilens-intelligence`; this crate adds what an application
//! needs around it.
//!
//! ## Architecture
//!
//! - **Config**: Engine configuration from `NUTRILENS_*` environment variables
//! - **Cache**: LRU report cache keyed by a digest of the inputs
//! - **Services**: `ReportService` combining score and personalized alerts
//! - **Logging**: Structured `tracing` output on stderr
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilens::config::EngineConfig;
//! use nutrilens::errors::AppResult;
//! use nutrilens::models::{FoodAnalysisInput, IngredientRecord, NutrientProfile};
//! use nutrilens::services::ReportService;
//!
//! fn main() -> AppResult<()> {
//!     let service = ReportService::new(EngineConfig::from_env()?);
//!     let input = FoodAnalysisInput::new(
//!         vec![IngredientRecord::safe("Rolled oats", 5)],
//!         NutrientProfile::default(),
//!     );
//!     let report = service.report(&input, None)?;
//!     println!("score = {}", report.analysis.breakdown.final_score);
//!     Ok(())
//! }
//! ```

/// Report cache keyed by input digest
pub mod cache;

/// Environment-driven configuration
pub mod config;

/// Shared error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Report generation service
pub mod services;

/// Engine-wide constants
pub use nutrilens_core::constants;

/// Scan input and health profile models
pub use nutrilens_core::models;

/// Scoring and alert engine
pub use nutrilens_intelligence as intelligence;
