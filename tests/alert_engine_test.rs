// ABOUTME: Tests for personalized disease, allergen, and health goal alerts
// ABOUTME: Covers severity precedence, custom labels, goal bands, and message fragments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutrilens::intelligence::alert_engine::{
    evaluate_goal, generate_alerts, GoalStatus, MessageCategory, MessagePart,
};
use nutrilens::intelligence::{AlertSeverity, FoodAnalyzer, SmartHealthAlert};
use nutrilens::models::{
    Allergen, Disease, FoodAnalysisInput, HealthGoal, IngredientRecord, NutrientProfile,
    UserHealthProfile,
};

fn alerts_for(
    ingredients: &[IngredientRecord],
    nutrients: &NutrientProfile,
    profile: &UserHealthProfile,
) -> SmartHealthAlert {
    generate_alerts(ingredients, nutrients, profile, &common::default_config())
}

fn goal_status(goal: HealthGoal, nutrients: &NutrientProfile) -> GoalStatus {
    let config = common::default_config();
    evaluate_goal(goal, nutrients, &config.goals, &config.nutrient_thresholds).status
}

// ============================================================================
// Disease alerts
// ============================================================================

#[test]
fn test_single_disease_match_is_warning() {
    common::init_test_logging();
    let profile = UserHealthProfile::new().with_disease(Disease::Hypertension);
    let alert = alerts_for(
        &[IngredientRecord::safe("Sodium", 30)],
        &NutrientProfile::unknown(),
        &profile,
    );

    assert!(alert.has_alerts);
    assert_eq!(alert.disease_alerts.len(), 1);
    let disease = &alert.disease_alerts[0];
    assert_eq!(disease.ingredient_name, "Sodium");
    assert_eq!(disease.disease, Some(Disease::Hypertension));
    assert_eq!(disease.reason, "disease.hypertension.sodium");
    assert_eq!(disease.risk_score, 30);
    assert!(!disease.is_custom);

    assert_eq!(alert.severity, AlertSeverity::Warning);
    assert_eq!(
        alert.overall_message_parts,
        vec![MessagePart {
            category: MessageCategory::Diseases,
            count: 1
        }]
    );
}

#[test]
fn test_one_alert_per_ingredient_and_disease() {
    let profile = UserHealthProfile::new().with_disease(Disease::Hypertension);
    // "monosodium" and "sodium" both match; only the first rule reports
    let alert = alerts_for(
        &[IngredientRecord::warning("Monosodium Glutamate", 60)],
        &NutrientProfile::unknown(),
        &profile,
    );
    assert_eq!(alert.disease_alerts.len(), 1);
    assert_eq!(alert.disease_alerts[0].matched_keyword, "sodium");
}

#[test]
fn test_many_disease_matches_escalate_to_danger() {
    let profile = UserHealthProfile::new().with_disease(Disease::Diabetes);
    let alert = alerts_for(
        &[
            IngredientRecord::safe("Sugar", 40),
            IngredientRecord::safe("Glucose", 40),
            IngredientRecord::safe("Honey", 20),
        ],
        &NutrientProfile::unknown(),
        &profile,
    );
    assert_eq!(alert.disease_alerts.len(), 3);
    assert_eq!(alert.severity, AlertSeverity::Danger);
}

#[test]
fn test_custom_disease_label_matches_by_substring() {
    let profile = UserHealthProfile::new().with_custom_disease(" Histamine ");
    let alert = alerts_for(
        &[IngredientRecord::safe("Histamine-rich yeast extract", 50)],
        &NutrientProfile::unknown(),
        &profile,
    );
    assert_eq!(alert.disease_alerts.len(), 1);
    let disease = &alert.disease_alerts[0];
    assert!(disease.is_custom);
    assert_eq!(disease.disease, None);
    assert_eq!(disease.disease_label, "Histamine");
    assert_eq!(disease.reason, "disease.custom.label_match");
}

#[test]
fn test_duplicate_custom_disease_labels_count_once() {
    let profile = UserHealthProfile::new()
        .with_custom_disease("Histamine")
        .with_custom_disease(" histamine")
        .with_custom_disease("HISTAMINE ");
    let alert = alerts_for(
        &[IngredientRecord::safe("Histamine-rich yeast extract", 50)],
        &NutrientProfile::unknown(),
        &profile,
    );

    assert_eq!(alert.disease_alerts.len(), 1);
    assert_eq!(alert.disease_alerts[0].disease_label, "Histamine");
    assert_eq!(alert.severity, AlertSeverity::Warning);
}

// ============================================================================
// Allergen alerts
// ============================================================================

#[test]
fn test_allergen_match_is_danger() {
    let profile = UserHealthProfile::new().with_allergen(Allergen::Peanuts);
    let alert = alerts_for(
        &[IngredientRecord::safe("Peanut Oil", 10)],
        &NutrientProfile::unknown(),
        &profile,
    );

    assert_eq!(alert.allergen_alerts.len(), 1);
    let allergen = &alert.allergen_alerts[0];
    assert_eq!(allergen.allergen, Some(Allergen::Peanuts));
    assert_eq!(allergen.matched_keyword, "peanut");
    assert_eq!(allergen.risk_score, 100);
    assert_eq!(alert.severity, AlertSeverity::Danger);
}

#[test]
fn test_allergen_dominates_everything_else() {
    let profile = UserHealthProfile::new()
        .with_allergen(Allergen::Milk)
        .with_disease(Disease::Hypertension)
        .with_goal(HealthGoal::LowSodium);
    let alert = alerts_for(
        &[
            IngredientRecord::safe("Whole Milk Powder", 10),
            IngredientRecord::safe("Salt", 40),
        ],
        &common::nutrients(2.0, 900.0, 1.0, 0.0),
        &profile,
    );

    assert_eq!(alert.severity, AlertSeverity::Danger);
    let categories: Vec<MessageCategory> = alert
        .overall_message_parts
        .iter()
        .map(|part| part.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            MessageCategory::Allergens,
            MessageCategory::Diseases,
            MessageCategory::UnmetGoals,
        ]
    );
}

#[test]
fn test_duplicate_custom_allergen_labels_alert_once() {
    let profile = UserHealthProfile::new()
        .with_custom_allergen("Lupin")
        .with_custom_allergen("lupin ");
    let alert = alerts_for(
        &[IngredientRecord::safe("Lupin flour", 15)],
        &NutrientProfile::unknown(),
        &profile,
    );

    assert_eq!(alert.allergen_alerts.len(), 1);
    let allergen = &alert.allergen_alerts[0];
    assert!(allergen.is_custom);
    assert_eq!(allergen.allergen_label, "Lupin");
    assert_eq!(allergen.matched_keyword, "lupin");
}

#[test]
fn test_unselected_allergens_are_ignored() {
    let profile = UserHealthProfile::new().with_allergen(Allergen::Sesame);
    let alert = alerts_for(
        &[IngredientRecord::safe("Peanut Oil", 10)],
        &NutrientProfile::unknown(),
        &profile,
    );
    assert!(alert.allergen_alerts.is_empty());
    assert_eq!(alert.severity, AlertSeverity::Safe);
}

// ============================================================================
// Health goals
// ============================================================================

#[test]
fn test_every_selected_goal_yields_one_alert() {
    let mut profile = UserHealthProfile::new();
    for goal in HealthGoal::ALL {
        profile = profile.with_goal(goal);
    }
    let alert = alerts_for(&[], &NutrientProfile::unknown(), &profile);

    let goals: Vec<HealthGoal> = alert.health_goal_alerts.iter().map(|g| g.goal_id).collect();
    assert_eq!(goals, HealthGoal::ALL.to_vec());
    for goal in &alert.health_goal_alerts {
        assert_eq!(goal.status, GoalStatus::Warning);
        assert_eq!(goal.numeric_value, None);
        assert_eq!(goal.message, format!("goal.{}.unknown", goal.goal_id.id()));
        assert_eq!(goal.goal_name, format!("goal.{}.name", goal.goal_id.id()));
    }

    assert!(alert.has_alerts);
    assert_eq!(alert.severity, AlertSeverity::Caution);
    assert_eq!(
        alert.overall_message_parts,
        vec![MessagePart {
            category: MessageCategory::GoalsNeedingAttention,
            count: 7
        }]
    );
}

#[test]
fn test_limit_goal_bands() {
    let sodium = |mg| goal_status(HealthGoal::LowSodium, &common::nutrients(0.0, mg, 0.0, 0.0));
    assert_eq!(sodium(100.0), GoalStatus::Good);
    assert_eq!(sodium(120.0), GoalStatus::Good);
    assert_eq!(sodium(300.0), GoalStatus::Warning);
    assert_eq!(sodium(700.0), GoalStatus::Danger);

    let fat = |g| goal_status(HealthGoal::LowFat, &common::nutrients(0.0, 0.0, g, 0.0));
    assert_eq!(fat(3.0), GoalStatus::Good);
    assert_eq!(fat(10.0), GoalStatus::Warning);
    assert_eq!(fat(20.0), GoalStatus::Danger);
}

#[test]
fn test_target_goal_bands() {
    let protein = |g| {
        goal_status(
            HealthGoal::HighProtein,
            &NutrientProfile {
                protein_g: g,
                ..NutrientProfile::unknown()
            },
        )
    };
    assert_eq!(protein(12.0), GoalStatus::Good);
    assert_eq!(protein(7.0), GoalStatus::Warning);
    assert_eq!(protein(2.0), GoalStatus::Danger);

    let fiber = |g| goal_status(HealthGoal::HighFiber, &common::nutrients(0.0, 0.0, 0.0, g));
    assert_eq!(fiber(6.0), GoalStatus::Good);
    assert_eq!(fiber(4.0), GoalStatus::Warning);
    assert_eq!(fiber(1.0), GoalStatus::Danger);
}

#[test]
fn test_weight_control_uses_declared_or_estimated_energy() {
    let declared = NutrientProfile {
        calories_kcal: Some(500.0),
        ..NutrientProfile::unknown()
    };
    assert_eq!(goal_status(HealthGoal::WeightControl, &declared), GoalStatus::Danger);

    // 4 * 10 + 9 * 5 + 4 * 10 = 125 kcal
    let estimated = NutrientProfile {
        protein_g: 10.0,
        fat_g: 5.0,
        sugar_g: 10.0,
        ..NutrientProfile::unknown()
    };
    assert_eq!(goal_status(HealthGoal::WeightControl, &estimated), GoalStatus::Good);
}

#[test]
fn test_gut_health_combines_fiber_and_sugar() {
    let gut = |sugar, fiber| {
        goal_status(
            HealthGoal::GutHealth,
            &common::nutrients(sugar, 0.0, 0.0, fiber),
        )
    };
    assert_eq!(gut(3.0, 4.0), GoalStatus::Good);
    assert_eq!(gut(30.0, 4.0), GoalStatus::Warning);
    assert_eq!(gut(3.0, 1.0), GoalStatus::Warning);
    assert_eq!(gut(30.0, 1.0), GoalStatus::Danger);
}

#[test]
fn test_danger_goal_alone_is_warning() {
    let profile = UserHealthProfile::new().with_goal(HealthGoal::LowSugar);
    let alert = alerts_for(&[], &common::nutrients(40.0, 0.0, 0.0, 0.0), &profile);
    assert_eq!(alert.health_goal_alerts[0].status, GoalStatus::Danger);
    assert_eq!(alert.health_goal_alerts[0].message, "goal.low_sugar.danger");
    assert_eq!(alert.severity, AlertSeverity::Warning);
}

// ============================================================================
// Whole products
// ============================================================================

#[test]
fn test_empty_profile_is_safe() {
    let input: FoodAnalysisInput = common::snack_input();
    let alert = FoodAnalyzer::default().personalize(&input, &common::empty_profile());

    assert!(!alert.has_alerts);
    assert_eq!(alert.severity, AlertSeverity::Safe);
    assert_eq!(
        alert.overall_message_parts,
        vec![MessagePart {
            category: MessageCategory::NoConcerns,
            count: 0
        }]
    );
}

#[test]
fn test_disease_scan_ignores_extraction_category() {
    let profile = UserHealthProfile::new().with_disease(Disease::CeliacDisease);
    let alert = FoodAnalyzer::default().personalize(&common::snack_input(), &profile);
    assert!(alert
        .disease_alerts
        .iter()
        .any(|d| d.ingredient_name == "Wheat Flour"));
}
