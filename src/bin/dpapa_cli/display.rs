// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for dpapa-cli
// ABOUTME: Text and JSON rendering of dashboard, nutrition, workouts, and progress

use dpapa_coach::dashboard::DashboardSummary;
use dpapa_coach::dpapa_core::constants::display::{MISSING_VALUE, UNKNOWN_NAME};
use dpapa_coach::dpapa_core::models::{format_bmi, NutritionTargets, ProgressSeries, WorkoutTemplate};
use dpapa_coach::AppResult;

fn kcal_text(value: Option<u32>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_owned(), |kcal| format!("{kcal} kcal"))
}

pub fn bmi_preview(bmi: Option<f64>) {
    println!("BMI preview: {}", format_bmi(bmi));
}

pub fn not_onboarded() {
    println!("No profile yet. Run `dpapa-cli onboard` first.");
}

pub fn renamed(name: Option<&str>) {
    println!("Name set to {}", name.unwrap_or(UNKNOWN_NAME));
}

pub fn dashboard(summary: &DashboardSummary, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    println!("\nWelcome, {}", summary.display_name);
    println!("{}", "=".repeat(40));
    println!("   Weight:   {} kg", summary.weight_text);
    println!("   Height:   {} cm", summary.height_text);
    println!("   BMI:      {}", summary.bmi_text);
    println!("   Goal:     {}", summary.goal);
    println!("   Activity: {}", summary.activity_level);
    println!("   TDEE:     {}", kcal_text(summary.targets.tdee));
    println!("   Calories: {} kcal", summary.targets.macros.calorie_target);
    Ok(())
}

pub fn nutrition(targets: &NutritionTargets, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(targets)?);
        return Ok(());
    }
    let macros = &targets.macros;
    println!("\nNutrition targets");
    println!("{}", "=".repeat(40));
    println!("   BMI:      {}", targets.bmi_text());
    println!("   BMR:      {}", kcal_text(targets.bmr));
    println!("   TDEE:     {}", kcal_text(targets.tdee));
    println!("   Calories: {} kcal", macros.calorie_target);
    println!("   Protein:  {} g", macros.protein_g);
    println!("   Fat:      {} g", macros.fat_g);
    println!("   Carbs:    {} g", macros.carbs_g);
    Ok(())
}

pub fn workouts(template: &WorkoutTemplate) {
    for day in &template.days {
        println!("\n{}", day.name);
        println!("{}", "-".repeat(40));
        for set in &day.exercises {
            println!("   {:<28} {set}", set.exercise);
        }
    }
}

pub fn progress(series: &ProgressSeries) {
    println!("\nWeight progress");
    println!("{}", "-".repeat(40));
    for point in series.points() {
        println!("   {}  {:.1} kg", point.date.format("%b %d"), point.weight_kg);
    }
    if let Some(change) = series.net_change_kg() {
        println!("   Net change: {change:+.1} kg");
    }
}
