// ABOUTME: Data models crossing the engine boundary
// ABOUTME: Re-exports scanned product input types and user health profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

/// Scanned product input: ingredients, nutrients, regulatory metadata
pub mod food;
/// User health profile: diseases, allergens, dietary goals
pub mod profile;

pub use food::{
    FoodAnalysisInput, IngredientCategory, IngredientRecord, IngredientRiskLevel,
    NutrientProfile, RegulatoryInfo,
};
pub use profile::{Allergen, Disease, HealthGoal, UserHealthProfile};
