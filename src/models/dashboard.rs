// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard response shapes.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::WorkoutResponse;

/// Calories for one category (pie chart slice).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryCalories {
    pub id: String,
    pub label: String,
    pub value: f64,
}

impl CategoryCalories {
    pub fn new(category: String, value: f64) -> Self {
        Self {
            id: category.clone(),
            label: category,
            value,
        }
    }
}

/// Seven-day trailing series, oldest first. `labels` and `calories` are
/// index-aligned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyData {
    pub labels: Vec<String>,
    pub calories: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardResponse {
    pub total_calories_burnt: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_workouts: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub avg_calories_burnt_per_workout: i64,
    pub pie_chart_data: Vec<CategoryCalories>,
    pub weekly_data: WeeklyData,
}

/// Workouts logged on one day plus their stored calorie total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayWorkoutsResponse {
    pub todays_workouts: Vec<WorkoutResponse>,
    pub total_calories_burnt: f64,
}
