// ABOUTME: Parse-on-input helpers for raw onboarding form text
// ABOUTME: Collapse empty, non-numeric, and invalid text into "absent"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;

/// Positive, finite measurement (height, weight, target weight)
///
/// Returns `None` for empty, whitespace, non-numeric, non-finite, zero, or
/// negative text.
#[must_use]
pub fn parse_measurement(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().and_then(positive_measurement)
}

/// Keep a numeric measurement only when it is finite and strictly positive
#[must_use]
pub fn positive_measurement(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Whole-number age; anything else is absent
#[must_use]
pub fn parse_age(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// ISO `YYYY-MM-DD` date, as produced by a date input
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Trimmed free text; blank text is absent
#[must_use]
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
