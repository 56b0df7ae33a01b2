// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod credentials;
pub mod dashboard;
pub mod workout_parser;

pub use dashboard::{DashboardService, DashboardWindows};
pub use workout_parser::{parse_workout, ParsedWorkout};
