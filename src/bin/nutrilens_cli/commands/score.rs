// ABOUTME: Score command reading product and profile fixtures and printing a report
// ABOUTME: Malformed JSON maps to InvalidFormat, unreadable files to StorageError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

use super::print_json;
use nutrilens::errors::{AppError, AppResult};
use nutrilens::models::{FoodAnalysisInput, UserHealthProfile};
use nutrilens::services::ReportService;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_resource_id(path.display().to_string())
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))
}

/// Score one product fixture
pub fn run(input_path: &Path, profile_path: Option<&Path>, compact: bool) -> AppResult<()> {
    let input: FoodAnalysisInput = read_json(input_path)?;
    let profile: Option<UserHealthProfile> = profile_path.map(read_json).transpose()?;
    debug!(
        ingredients = input.ingredients.len(),
        personalized = profile.is_some(),
        "Fixtures loaded"
    );

    let service = ReportService::from_env()?;
    let report = service.report(&input, profile.as_ref())?;
    info!(
        input = %input_path.display(),
        final_score = report.analysis.breakdown.final_score,
        "Score command complete"
    );
    print_json(report.as_ref(), compact)
}
