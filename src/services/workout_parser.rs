// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Free-text workout parser.
//!
//! A workout is submitted as five lines:
//!
//! ```text
//! #Legs       category (first character dropped)
//! Squat       workout name
//! 4x10        sets x reps
//! 60          weight (kg)
//! 45          duration (minutes)
//! ```
//!
//! Lines are trimmed and blank lines are skipped. Anything after the fifth
//! line is ignored.

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::Workout;

const REQUIRED_LINES: usize = 5;

/// Fields parsed from a workout string, before ownership and timestamp are
/// attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWorkout {
    pub category: String,
    pub workout_name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub duration: u32,
}

impl ParsedWorkout {
    /// Attach owner, ID and timestamp; derives `calories_burned`.
    pub fn into_workout(self, id: String, user_id: String, date: DateTime<Utc>) -> Workout {
        let calories_burned = Workout::calories_for(self.duration, self.weight);
        Workout {
            id,
            user_id,
            category: self.category,
            workout_name: self.workout_name,
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            duration: self.duration,
            date,
            calories_burned,
        }
    }
}

/// Parse a workout string.
pub fn parse_workout(input: Option<&str>) -> Result<ParsedWorkout> {
    let input = match input {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(AppError::Validation("missing workoutString".to_string())),
    };

    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < REQUIRED_LINES {
        return Err(AppError::Validation("invalid format".to_string()));
    }

    let mut category = lines[0].chars();
    category.next();
    let (sets, reps) = parse_sets_reps(lines[2])?;

    Ok(ParsedWorkout {
        category: category.as_str().to_string(),
        workout_name: lines[1].to_string(),
        sets,
        reps,
        weight: parse_weight(lines[3])?,
        duration: lines[4]
            .parse()
            .map_err(|_| invalid_field("duration", lines[4]))?,
    })
}

/// Split `"<sets>x<reps>"` on the first `x`. Both must be positive.
fn parse_sets_reps(line: &str) -> Result<(u32, u32)> {
    let (sets, reps) = line
        .split_once('x')
        .ok_or_else(|| invalid_field("sets x reps", line))?;

    let parse_positive = |raw: &str, field: &str| -> Result<u32> {
        match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(invalid_field(field, raw.trim())),
        }
    };

    Ok((parse_positive(sets, "sets")?, parse_positive(reps, "reps")?))
}

fn parse_weight(line: &str) -> Result<f64> {
    match line.parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(invalid_field("weight", line)),
    }
}

fn invalid_field(field: &str, value: &str) -> AppError {
    AppError::Validation(format!("invalid {}: {:?}", field, value))
}
