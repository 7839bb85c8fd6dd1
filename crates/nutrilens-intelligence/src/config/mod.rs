// ABOUTME: Configuration module for nutrilens-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

/// Intelligence module configuration (ratings, scoring, bands, alerts, goals)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
