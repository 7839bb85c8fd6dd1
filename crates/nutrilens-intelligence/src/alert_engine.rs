// ABOUTME: Personalized alert engine matching a product against one user's health profile
// ABOUTME: Disease, allergen, and health goal alerts aggregated into one severity and message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Personalization / Alert Engine
//!
//! Disease and allergen scans look at every ingredient regardless of its
//! extraction category. Every selected goal yields exactly one goal alert.
//!
//! Severity precedence, first rule wins:
//! 1. any allergen alert: danger
//! 2. disease alerts at or above the danger count: danger
//! 3. any disease alert: warning
//! 4. any danger goal: warning
//! 5. any warning goal: caution
//! 6. otherwise safe
//!
//! All text fields are dotted localization keys.

use crate::config::intelligence::{
    AlertConfig, GoalThresholdsConfig, IntelligenceConfig, LimitBand, NutrientThresholdsConfig,
    TargetBand,
};
use crate::knowledge_base::{self, allergens, diseases};
use crate::nutrient_rating::{self, is_declared};
use nutrilens_core::constants::units;
use nutrilens_core::models::{
    Allergen, Disease, HealthGoal, IngredientRecord, NutrientProfile, UserHealthProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Reason key emitted for free-text disease matches
const CUSTOM_DISEASE_REASON: &str = "disease.custom.label_match";

/// Overall alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Nothing relevant found
    Safe,
    /// Goals need attention
    Caution,
    /// Disease-relevant ingredients or unmet goals
    Warning,
    /// Allergen present or many disease-relevant ingredients
    Danger,
}

/// Ingredient relevant to one of the user's diseases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseAlert {
    /// Ingredient name as declared
    pub ingredient_name: String,
    /// Disease id, or the trimmed custom label
    pub disease_label: String,
    /// Catalog disease, absent for custom labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<Disease>,
    /// Whether the label came from free text
    pub is_custom: bool,
    /// Reason key, `disease.<id>.<reason>`
    pub reason: String,
    /// Keyword or label that matched
    pub matched_keyword: String,
    /// Ingredient risk score
    pub risk_score: u8,
}

/// Ingredient containing one of the user's allergens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenAlert {
    /// Ingredient name as declared
    pub ingredient_name: String,
    /// Allergen id, or the trimmed custom label
    pub allergen_label: String,
    /// Catalog allergen, absent for custom labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergen: Option<Allergen>,
    /// Whether the label came from free text
    pub is_custom: bool,
    /// Keyword or label that matched
    pub matched_keyword: String,
    /// Fixed allergen risk score
    pub risk_score: u8,
}

/// Goal evaluation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Goal met
    Good,
    /// Borderline, or value unknown
    Warning,
    /// Goal clearly unmet
    Danger,
}

/// Evaluation of one selected goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthGoalAlert {
    /// Goal id
    pub goal_id: HealthGoal,
    /// Goal name key, `goal.<id>.name`
    pub goal_name: String,
    /// Status
    pub status: GoalStatus,
    /// Message key, `goal.<id>.<status>` or `goal.<id>.unknown`
    pub message: String,
    /// Evaluated value, absent when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
    /// Target threshold
    pub threshold: f64,
    /// Unit of value and threshold
    pub unit: String,
}

/// Category of an overall message fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    /// Allergen alerts
    Allergens,
    /// Disease alerts
    Diseases,
    /// Danger goals
    UnmetGoals,
    /// Warning goals
    GoalsNeedingAttention,
    /// Nothing to report
    NoConcerns,
}

/// One structured message fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePart {
    /// Category
    pub category: MessageCategory,
    /// Number of alerts in the category
    pub count: usize,
}

/// Aggregated alerts for one (product, profile) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartHealthAlert {
    /// Any disease or allergen alert, or any goal not good
    pub has_alerts: bool,
    /// Disease alerts
    pub disease_alerts: Vec<DiseaseAlert>,
    /// Allergen alerts
    pub allergen_alerts: Vec<AllergenAlert>,
    /// One alert per selected goal
    pub health_goal_alerts: Vec<HealthGoalAlert>,
    /// Overall severity
    pub severity: AlertSeverity,
    /// Ordered message fragments
    pub overall_message_parts: Vec<MessagePart>,
}

/// Trimmed custom labels paired with their lowercase form
///
/// Labels equal after trimming and lowercasing collapse into the first
/// spelling seen.
fn custom_labels(labels: &[String]) -> Vec<(&str, String)> {
    let mut seen = BTreeSet::new();
    labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .filter_map(|label| {
            let lower = label.to_lowercase();
            seen.insert(lower.clone()).then_some((label, lower))
        })
        .collect()
}

/// Disease alerts, one per matched (ingredient, disease) pair
#[must_use]
pub fn disease_alerts(
    ingredients: &[IngredientRecord],
    profile: &UserHealthProfile,
) -> Vec<DiseaseAlert> {
    let names: Vec<String> = ingredients
        .iter()
        .map(|ingredient| ingredient.name.to_lowercase())
        .collect();
    let mut alerts = Vec::new();

    for disease in &profile.diseases {
        for (ingredient, name_lower) in ingredients.iter().zip(&names) {
            if let Some(rule) = diseases::first_matching_rule(*disease, name_lower) {
                alerts.push(DiseaseAlert {
                    ingredient_name: ingredient.name.clone(),
                    disease_label: disease.id().to_owned(),
                    disease: Some(*disease),
                    is_custom: false,
                    reason: format!("disease.{}.{}", disease.id(), rule.reason),
                    matched_keyword: rule.keyword.to_owned(),
                    risk_score: ingredient.risk_score,
                });
            }
        }
    }

    for (label, label_lower) in custom_labels(&profile.custom_diseases) {
        for (ingredient, name_lower) in ingredients.iter().zip(&names) {
            if name_lower.contains(&label_lower) {
                alerts.push(DiseaseAlert {
                    ingredient_name: ingredient.name.clone(),
                    disease_label: label.to_owned(),
                    disease: None,
                    is_custom: true,
                    reason: CUSTOM_DISEASE_REASON.to_owned(),
                    matched_keyword: label_lower.clone(),
                    risk_score: ingredient.risk_score,
                });
            }
        }
    }

    alerts
}

/// Allergen alerts, one per matched (ingredient, allergen) pair
#[must_use]
pub fn allergen_alerts(
    ingredients: &[IngredientRecord],
    profile: &UserHealthProfile,
    config: &AlertConfig,
) -> Vec<AllergenAlert> {
    let names: Vec<String> = ingredients
        .iter()
        .map(|ingredient| ingredient.name.to_lowercase())
        .collect();
    let mut alerts = Vec::new();

    for allergen in &profile.allergens {
        let keywords = allergens::keywords_for(*allergen);
        for (ingredient, name_lower) in ingredients.iter().zip(&names) {
            if let Some(keyword) = knowledge_base::first_keyword(name_lower, keywords) {
                alerts.push(AllergenAlert {
                    ingredient_name: ingredient.name.clone(),
                    allergen_label: allergen.id().to_owned(),
                    allergen: Some(*allergen),
                    is_custom: false,
                    matched_keyword: keyword.to_owned(),
                    risk_score: config.allergen_risk_score,
                });
            }
        }
    }

    for (label, label_lower) in custom_labels(&profile.custom_allergens) {
        for (ingredient, name_lower) in ingredients.iter().zip(&names) {
            if name_lower.contains(&label_lower) {
                alerts.push(AllergenAlert {
                    ingredient_name: ingredient.name.clone(),
                    allergen_label: label.to_owned(),
                    allergen: None,
                    is_custom: true,
                    matched_keyword: label_lower.clone(),
                    risk_score: config.allergen_risk_score,
                });
            }
        }
    }

    alerts
}

fn limit_status(value: f64, band: LimitBand) -> GoalStatus {
    if value <= band.good_max {
        GoalStatus::Good
    } else if value <= band.warning_max {
        GoalStatus::Warning
    } else {
        GoalStatus::Danger
    }
}

fn target_status(value: f64, band: TargetBand) -> GoalStatus {
    if value >= band.good_min {
        GoalStatus::Good
    } else if value >= band.warning_min {
        GoalStatus::Warning
    } else {
        GoalStatus::Danger
    }
}

const fn status_key(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Good => "good",
        GoalStatus::Warning => "warning",
        GoalStatus::Danger => "danger",
    }
}

/// Energy per 100 g: declared value, else estimated from macros
#[must_use]
pub fn energy_kcal(nutrients: &NutrientProfile) -> f64 {
    match nutrients.calories_kcal {
        Some(kcal) if is_declared(kcal) => kcal,
        _ => {
            units::KCAL_PER_GRAM_PROTEIN * nutrients.protein_g
                + units::KCAL_PER_GRAM_FAT * nutrients.fat_g
                + units::KCAL_PER_GRAM_SUGAR * nutrients.sugar_g
        }
    }
}

/// Evaluate one goal
#[must_use]
pub fn evaluate_goal(
    goal: HealthGoal,
    nutrients: &NutrientProfile,
    goals: &GoalThresholdsConfig,
    thresholds: &NutrientThresholdsConfig,
) -> HealthGoalAlert {
    let (value, threshold, unit, status) = match goal {
        HealthGoal::LowSodium => {
            let band = goals.low_sodium;
            let v = nutrients.sodium_mg;
            (v, band.good_max, units::MILLIGRAMS, limit_status(v, band))
        }
        HealthGoal::LowSugar => {
            let band = goals.low_sugar;
            let v = nutrients.sugar_g;
            (v, band.good_max, units::GRAMS, limit_status(v, band))
        }
        HealthGoal::HighFiber => {
            let band = goals.high_fiber;
            let v = nutrients.fiber_g;
            (v, band.good_min, units::GRAMS, target_status(v, band))
        }
        HealthGoal::LowFat => {
            let band = goals.low_fat;
            let v = nutrients.fat_g;
            (v, band.good_max, units::GRAMS, limit_status(v, band))
        }
        HealthGoal::HighProtein => {
            let band = goals.high_protein;
            let v = nutrients.protein_g;
            (v, band.good_min, units::GRAMS, target_status(v, band))
        }
        HealthGoal::WeightControl => {
            let band = goals.weight_control;
            let v = energy_kcal(nutrients);
            (v, band.good_max, units::KILOCALORIES, limit_status(v, band))
        }
        HealthGoal::GutHealth => {
            let v = nutrients.fiber_g;
            let sugar_red = nutrient_rating::rate_limit(
                nutrients.sugar_g,
                thresholds.sugar_green_max_g,
                thresholds.sugar_amber_max_g,
            )
            .is_red();
            let fiber_ok = v >= goals.gut_health_fiber_min_g;
            let status = match (fiber_ok, sugar_red) {
                (true, false) => GoalStatus::Good,
                (false, true) => GoalStatus::Danger,
                _ => GoalStatus::Warning,
            };
            (v, goals.gut_health_fiber_min_g, units::GRAMS, status)
        }
    };

    let id = goal.id();
    let (status, message, numeric_value) = if is_declared(value) {
        (status, format!("goal.{id}.{}", status_key(status)), Some(value))
    } else {
        (GoalStatus::Warning, format!("goal.{id}.unknown"), None)
    };

    HealthGoalAlert {
        goal_id: goal,
        goal_name: format!("goal.{id}.name"),
        status,
        message,
        numeric_value,
        threshold,
        unit: unit.to_owned(),
    }
}

/// Overall severity by fixed precedence
#[must_use]
pub fn aggregate_severity(
    disease_alerts: &[DiseaseAlert],
    allergen_alerts: &[AllergenAlert],
    goal_alerts: &[HealthGoalAlert],
    config: &AlertConfig,
) -> AlertSeverity {
    let has_goal = |status: GoalStatus| goal_alerts.iter().any(|alert| alert.status == status);

    if !allergen_alerts.is_empty() || disease_alerts.len() >= config.danger_disease_alert_count {
        AlertSeverity::Danger
    } else if !disease_alerts.is_empty() || has_goal(GoalStatus::Danger) {
        AlertSeverity::Warning
    } else if has_goal(GoalStatus::Warning) {
        AlertSeverity::Caution
    } else {
        AlertSeverity::Safe
    }
}

/// Message fragments in fixed order
#[must_use]
pub fn overall_message_parts(
    disease_alerts: &[DiseaseAlert],
    allergen_alerts: &[AllergenAlert],
    goal_alerts: &[HealthGoalAlert],
) -> Vec<MessagePart> {
    let goal_count = |status: GoalStatus| {
        goal_alerts
            .iter()
            .filter(|alert| alert.status == status)
            .count()
    };
    let parts: Vec<MessagePart> = [
        (MessageCategory::Allergens, allergen_alerts.len()),
        (MessageCategory::Diseases, disease_alerts.len()),
        (MessageCategory::UnmetGoals, goal_count(GoalStatus::Danger)),
        (
            MessageCategory::GoalsNeedingAttention,
            goal_count(GoalStatus::Warning),
        ),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(category, count)| MessagePart { category, count })
    .collect();

    if parts.is_empty() {
        vec![MessagePart {
            category: MessageCategory::NoConcerns,
            count: 0,
        }]
    } else {
        parts
    }
}

/// Generate the personalized alert for one product and profile
#[must_use]
pub fn generate_alerts(
    ingredients: &[IngredientRecord],
    nutrients: &NutrientProfile,
    profile: &UserHealthProfile,
    config: &IntelligenceConfig,
) -> SmartHealthAlert {
    let disease_alerts = disease_alerts(ingredients, profile);
    let allergen_alerts = allergen_alerts(ingredients, profile, &config.alerts);
    let health_goal_alerts: Vec<HealthGoalAlert> = profile
        .goals
        .iter()
        .map(|goal| evaluate_goal(*goal, nutrients, &config.goals, &config.nutrient_thresholds))
        .collect();

    let severity = aggregate_severity(
        &disease_alerts,
        &allergen_alerts,
        &health_goal_alerts,
        &config.alerts,
    );
    let overall_message_parts =
        overall_message_parts(&disease_alerts, &allergen_alerts, &health_goal_alerts);
    let has_alerts = !disease_alerts.is_empty()
        || !allergen_alerts.is_empty()
        || health_goal_alerts
            .iter()
            .any(|alert| alert.status != GoalStatus::Good);

    debug!(
        diseases = disease_alerts.len(),
        allergens = allergen_alerts.len(),
        goals = health_goal_alerts.len(),
        ?severity,
        "Personalized alerts generated"
    );

    SmartHealthAlert {
        has_alerts,
        disease_alerts,
        allergen_alerts,
        health_goal_alerts,
        severity,
        overall_message_parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_falls_back_to_macros() {
        let nutrients = NutrientProfile {
            protein_g: 10.0,
            fat_g: 5.0,
            sugar_g: 2.5,
            ..NutrientProfile::default()
        };
        assert!((energy_kcal(&nutrients) - 95.0).abs() < 1e-9);

        let declared = NutrientProfile {
            calories_kcal: Some(210.0),
            ..nutrients
        };
        assert!((energy_kcal(&declared) - 210.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blank_custom_labels_are_ignored() {
        let profile = UserHealthProfile::new()
            .with_custom_allergen("   ")
            .with_custom_allergen(" Lupin ");
        let ingredients = [IngredientRecord::safe("Lupin flour", 10)];
        let alerts = allergen_alerts(&ingredients, &profile, &AlertConfig::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].allergen_label, "Lupin");
        assert!(alerts[0].is_custom);
    }
}
