// ABOUTME: Criterion benchmarks for the physiology estimator and intake merge
// ABOUTME: Measures per-render cost of BMI/BMR/TDEE/macros and of profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the estimator.
//!
//! Targets are recomputed on every render, so these track the cost of a full
//! `estimate_nutrition_targets` call and of folding step updates into a draft.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dpapa_coach::dpapa_core::models::{ActivityLevel, Gender, Goal, Profile};
use dpapa_coach::intake::{ProfileIntake, ProfileUpdate};
use dpapa_coach::intelligence::{
    compute_bmr, compute_macro_targets, estimate_nutrition_targets, NutritionConfig,
};

fn complete_profile() -> Profile {
    Profile {
        age: Some(30),
        gender: Some(Gender::Male),
        height_cm: Some(175.0),
        weight_kg: Some(78.0),
        goal: Some(Goal::MuscleGain),
        activity_level: Some(ActivityLevel::High),
        ..Profile::default()
    }
}

fn bench_estimate_targets(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let mut group = c.benchmark_group("estimate_targets");

    let profiles = [
        ("complete", complete_profile()),
        ("empty", Profile::default()),
    ];
    for (name, profile) in &profiles {
        group.bench_with_input(BenchmarkId::from_parameter(name), profile, |b, profile| {
            b.iter(|| estimate_nutrition_targets(black_box(profile), &config));
        });
    }
    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let mut group = c.benchmark_group("components");

    group.bench_function("bmr", |b| {
        b.iter(|| {
            compute_bmr(
                black_box(Some(Gender::Female)),
                black_box(Some(60.0)),
                black_box(Some(165.0)),
                black_box(Some(25)),
                &config.bmr,
            )
        });
    });

    group.bench_function("macro_targets", |b| {
        b.iter(|| {
            compute_macro_targets(
                black_box(Some(Goal::FatLoss)),
                black_box(2680),
                &config.goal_factors,
                &config.macronutrients,
            )
        });
    });
    group.finish();
}

fn bench_intake_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("intake_updates");

    for count in [3_usize, 30, 300] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut intake = ProfileIntake::new();
                for i in 0..count {
                    let weight = format!("{}", 70 + i % 20);
                    intake.update_profile_fields(&ProfileUpdate::body_metrics("175", &weight));
                }
                intake.finalize_profile()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_estimate_targets,
    bench_components,
    bench_intake_updates
);
criterion_main!(benches);
