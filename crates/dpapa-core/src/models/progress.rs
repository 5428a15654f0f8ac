// ABOUTME: Dated body-weight progress series with trend helpers
// ABOUTME: Keeps points ordered by date and reports the net weight change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One body-weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Measurement date
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

/// Body-weight measurements ordered by date, at most one per day
///
/// Serialized as a bare array of points. Deserialization goes through
/// [`ProgressSeries::new`], so stored series are re-sorted on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ProgressPoint>", into = "Vec<ProgressPoint>")]
pub struct ProgressSeries {
    points: Vec<ProgressPoint>,
}

impl From<Vec<ProgressPoint>> for ProgressSeries {
    fn from(points: Vec<ProgressPoint>) -> Self {
        Self::new(points)
    }
}

impl From<ProgressSeries> for Vec<ProgressPoint> {
    fn from(series: ProgressSeries) -> Self {
        series.points
    }
}

impl ProgressSeries {
    /// Build a series from arbitrary points
    ///
    /// Points are sorted by date; when a date repeats, the point given last
    /// wins.
    #[must_use]
    pub fn new(mut points: Vec<ProgressPoint>) -> Self {
        // dedup keeps the first of each run; reversing makes that the last input
        points.sort_by_key(|point| point.date);
        points.reverse();
        points.dedup_by_key(|point| point.date);
        points.reverse();
        Self { points }
    }

    /// Weekly sample series shown before any real check-ins exist
    #[must_use]
    pub fn sample() -> Self {
        let weekly = [
            (8, 1, 80.0),
            (8, 8, 79.4),
            (8, 15, 78.9),
            (8, 22, 78.2),
            (8, 29, 77.7),
            (9, 5, 77.1),
        ];
        Self::new(
            weekly
                .iter()
                .filter_map(|&(month, day, weight_kg)| {
                    NaiveDate::from_ymd_opt(2025, month, day)
                        .map(|date| ProgressPoint { date, weight_kg })
                })
                .collect(),
        )
    }

    /// Points in date order
    #[must_use]
    pub fn points(&self) -> &[ProgressPoint] {
        &self.points
    }

    /// Most recent point
    #[must_use]
    pub fn latest(&self) -> Option<&ProgressPoint> {
        self.points.last()
    }

    /// Insert a measurement, replacing any existing point on the same date
    pub fn record(&mut self, point: ProgressPoint) {
        match self.points.binary_search_by_key(&point.date, |p| p.date) {
            Ok(index) => self.points[index] = point,
            Err(index) => self.points.insert(index, point),
        }
    }

    /// Last minus first weight, one decimal; `None` with fewer than two points
    #[must_use]
    pub fn net_change_kg(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => {
                Some(((last.weight_kg - first.weight_kg) * 10.0).round() / 10.0)
            }
            _ => None,
        }
    }
}
