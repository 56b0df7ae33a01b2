// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod dashboard;
pub mod user;
pub mod workout;

pub use dashboard::{CategoryCalories, DashboardResponse, DayWorkoutsResponse, WeeklyData};
pub use user::{User, UserResponse};
pub use workout::{Workout, WorkoutResponse};
