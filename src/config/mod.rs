// ABOUTME: Configuration management module for the NutriLens embedding surface
// ABOUTME: Combines engine intelligence settings with cache and runtime options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Configuration module for NutriLens
//!
//! - **Environment**: Engine configuration from environment variables
//! - **Intelligence**: Re-exported typed scoring and alert configuration

/// Environment-driven engine configuration
pub mod environment;

pub use environment::{EngineConfig, CACHE_CAPACITY_ENV, DEFAULT_CACHE_CAPACITY};
pub use nutrilens_intelligence::config::{ConfigError, IntelligenceConfig};
