// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! [`FitnessStore`] is the seam between handlers and persistence. Backends
//! implement the primitive reads and writes; the calorie queries the
//! dashboard needs are provided on top of [`FitnessStore::find_workouts`].

pub mod firestore;
pub mod memory;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{User, Workout};

pub use self::firestore::FirestoreDb;
pub use memory::MemoryDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const WORKOUTS: &str = "workouts";
}

/// A span of time used to select workouts by `date`.
///
/// The start is always inclusive. The end is exclusive for half-open
/// windows and inclusive for closed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub end_inclusive: bool,
}

impl TimeWindow {
    /// `[start, end)`
    pub fn half_open(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            end_inclusive: false,
        }
    }

    /// `[start, end]`
    pub fn closed(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            end_inclusive: true,
        }
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start
            && if self.end_inclusive {
                *instant <= self.end
            } else {
                *instant < self.end
            }
    }
}

/// Persistence for users and workouts.
#[async_trait]
pub trait FitnessStore: Send + Sync {
    // ─── Users ─────────────────────────────────────────────────────

    /// Get a user by ID.
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError>;

    /// Get a user by (normalized) email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Store a new user.
    async fn create_user(&self, user: &User) -> Result<(), AppError>;

    // ─── Workouts ──────────────────────────────────────────────────

    /// Store a new workout.
    async fn create_workout(&self, workout: &Workout) -> Result<(), AppError>;

    /// All of a user's workouts whose `date` falls in `window`.
    async fn find_workouts(
        &self,
        user_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Workout>, AppError>;

    // ─── Calorie queries ───────────────────────────────────────────

    /// Number of a user's workouts in `window`.
    async fn count_workouts(&self, user_id: &str, window: &TimeWindow) -> Result<u64, AppError> {
        Ok(self.find_workouts(user_id, window).await?.len() as u64)
    }

    /// Sum of `duration * weight * 5` over a user's workouts in `window`.
    async fn sum_calories(&self, user_id: &str, window: &TimeWindow) -> Result<f64, AppError> {
        Ok(self
            .find_workouts(user_id, window)
            .await?
            .iter()
            .map(Workout::calories)
            .sum())
    }

    /// `duration * weight * 5` summed per category, ordered by category.
    async fn calories_by_category(
        &self,
        user_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<(String, f64)>, AppError> {
        let workouts = self.find_workouts(user_id, window).await?;
        Ok(group_calories_by_category(&workouts))
    }
}

/// `duration * weight * 5` summed per category of `workouts`, ordered by
/// category.
pub fn group_calories_by_category(workouts: &[Workout]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for workout in workouts {
        *groups.entry(workout.category.clone()).or_insert(0.0) += workout.calories();
    }
    groups.into_iter().collect()
}
