// ABOUTME: Service layer combining engine analysis with caching for embedders
// ABOUTME: Exposes ReportService, the single entry point used by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

/// Product report generation with memoization
pub mod report;

pub use report::{ProductReport, ReportService};
