// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils::format_utc_rfc3339;

/// Calories burned per minute per kilogram.
pub const CALORIES_FACTOR: f64 = 5.0;

/// Stored workout record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Generated workout ID (also used as document ID)
    pub id: String,
    /// Owning user's ID
    #[serde(rename = "user")]
    pub user_id: String,
    pub category: String,
    pub workout_name: String,
    pub sets: u32,
    pub reps: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Duration in minutes
    pub duration: u32,
    /// When the workout was logged
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub date: DateTime<Utc>,
    /// `duration * weight * 5`, persisted at write time
    #[serde(default)]
    pub calories_burned: f64,
}

impl Workout {
    /// The single calorie formula used everywhere.
    pub fn calories_for(duration: u32, weight: f64) -> f64 {
        f64::from(duration) * weight * CALORIES_FACTOR
    }

    /// Calories recomputed from duration and weight.
    pub fn calories(&self) -> f64 {
        Self::calories_for(self.duration, self.weight)
    }
}

/// Workout as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutResponse {
    pub id: String,
    pub user: String,
    pub category: String,
    pub workout_name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub duration: u32,
    pub date: String,
    pub calories_burned: f64,
}

impl From<Workout> for WorkoutResponse {
    fn from(w: Workout) -> Self {
        Self {
            id: w.id,
            user: w.user_id,
            category: w.category,
            workout_name: w.workout_name,
            sets: w.sets,
            reps: w.reps,
            weight: w.weight,
            duration: w.duration,
            date: format_utc_rfc3339(w.date),
            calories_burned: w.calories_burned,
        }
    }
}
