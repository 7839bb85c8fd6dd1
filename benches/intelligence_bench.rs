// ABOUTME: Criterion benchmarks for the food analysis pipeline
// ABOUTME: Measures classification, scoring, alert generation, and cached reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Criterion benchmarks for the NutriLens engine.
//!
//! Measures ingredient classification, full product analysis with varying
//! ingredient list lengths, personalization, and the report cache hit path.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrilens::config::EngineConfig;
use nutrilens::intelligence::ingredient_classifier::classify_ingredients;
use nutrilens::intelligence::FoodAnalyzer;
use nutrilens::models::{
    Allergen, Disease, FoodAnalysisInput, HealthGoal, IngredientRecord, NutrientProfile,
    UserHealthProfile,
};
use nutrilens::services::ReportService;

const LABEL_NAMES: &[(&str, bool, u8)] = &[
    ("Wheat Flour", false, 10),
    ("Glucose-Fructose Syrup", true, 75),
    ("Partially Hydrogenated Palm Oil", true, 85),
    ("Salt", true, 40),
    ("Emulsifier (E471)", true, 50),
    ("Sodium Benzoate", true, 70),
    ("Tartrazine", true, 85),
    ("Natural Flavouring", true, 45),
    ("Whole Grain Oats", false, 5),
    ("Citric Acid", true, 20),
    ("Milk Powder", false, 15),
    ("Soy Lecithin", true, 20),
];

/// Label of `count` ingredients cycling through realistic names
fn generate_label(count: usize) -> FoodAnalysisInput {
    let ingredients = (0..count)
        .map(|index| {
            let (name, warning, risk_score) = LABEL_NAMES[index % LABEL_NAMES.len()];
            if warning {
                IngredientRecord::warning(name, risk_score)
            } else {
                IngredientRecord::safe(name, risk_score)
            }
        })
        .collect();
    FoodAnalysisInput::new(
        ingredients,
        NutrientProfile {
            sugar_g: 24.0,
            sodium_mg: 480.0,
            fat_g: 7.5,
            fiber_g: 2.0,
            protein_g: 6.0,
            calories_kcal: Some(460.0),
        },
    )
}

fn full_profile() -> UserHealthProfile {
    let mut profile = UserHealthProfile::new()
        .with_disease(Disease::Diabetes)
        .with_disease(Disease::Hypertension)
        .with_disease(Disease::CeliacDisease)
        .with_allergen(Allergen::Milk)
        .with_allergen(Allergen::Soy)
        .with_custom_allergen("lupin");
    for goal in HealthGoal::ALL {
        profile = profile.with_goal(goal);
    }
    profile
}

/// Benchmark ingredient classification
fn bench_classification(c: &mut Criterion) {
    let label = generate_label(12);
    c.bench_function("classify_ingredients_12", |b| {
        b.iter(|| classify_ingredients(black_box(&label.ingredients)));
    });
}

/// Benchmark full analysis with varying label lengths
#[allow(clippy::cast_possible_truncation)]
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = FoodAnalyzer::default();

    for count in [3, 12, 48] {
        let label = generate_label(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("analyze", count), &label, |b, label| {
            b.iter(|| analyzer.analyze(black_box(label)));
        });
    }

    group.finish();
}

/// Benchmark personalized alert generation
fn bench_personalize(c: &mut Criterion) {
    let analyzer = FoodAnalyzer::default();
    let label = generate_label(12);
    let profile = full_profile();

    c.bench_function("personalize_full_profile", |b| {
        b.iter(|| analyzer.personalize(black_box(&label), black_box(&profile)));
    });
}

/// Benchmark report generation with and without the cache
fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let label = generate_label(12);
    let profile = full_profile();

    let cached = ReportService::new(EngineConfig::default());
    group.bench_function("cache_hit", |b| {
        b.iter(|| cached.report(black_box(&label), Some(black_box(&profile))));
    });

    let uncached = ReportService::new(EngineConfig::default().with_cache_capacity(0));
    group.bench_function("uncached", |b| {
        b.iter(|| uncached.report(black_box(&label), Some(black_box(&profile))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_analysis,
    bench_personalize,
    bench_reports,
);
criterion_main!(benches);
