// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{DashboardResponse, DayWorkoutsResponse, WorkoutResponse};
use crate::services::{parse_workout, DashboardWindows};
use crate::time_utils::{day_window_exclusive, parse_query_date};
use crate::AppState;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/dashboard", get(get_dashboard))
        .route("/api/user/workout", get(get_workouts_by_date).post(add_workout))
}

// ─── Dashboard ───────────────────────────────────────────────

/// Today's totals, category breakdown and the trailing week.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardResponse>> {
    let now = Local::now();
    let windows = DashboardWindows::for_date(&Local, now.date_naive());

    let dashboard = state.dashboard.build(&user.user_id, &windows).await?;
    Ok(Json(dashboard))
}

// ─── Workouts ────────────────────────────────────────────────

#[derive(Deserialize)]
struct WorkoutsQuery {
    /// Day to list (`YYYY-MM-DD` or RFC3339); defaults to today
    date: Option<String>,
}

/// List one day's workouts.
async fn get_workouts_by_date(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    query: std::result::Result<Query<WorkoutsQuery>, QueryRejection>,
) -> Result<Json<DayWorkoutsResponse>> {
    let Query(params) = query?;
    let day = match params.date.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(raw) => parse_query_date(raw, &Local).ok_or_else(|| {
            AppError::Validation(
                "Invalid 'date' parameter: must be YYYY-MM-DD or RFC3339 datetime".to_string(),
            )
        })?,
        None => Local::now().date_naive(),
    };

    tracing::debug!(user_id = %user.user_id, %day, "Fetching workouts");

    let window = day_window_exclusive(&Local, day);
    let response = state.dashboard.workouts_for_day(&user.user_id, &window).await?;
    Ok(Json(response))
}

#[derive(Deserialize)]
struct AddWorkoutRequest {
    #[serde(default, rename = "workoutString")]
    workout_string: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AddWorkoutResponse {
    pub success: bool,
    pub workout: WorkoutResponse,
}

/// Parse a workout string and store it for the current user.
async fn add_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    body: std::result::Result<Json<AddWorkoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddWorkoutResponse>)> {
    let Json(req) = body?;
    let parsed = parse_workout(req.workout_string.as_deref())?;

    let workout = parsed.into_workout(
        uuid::Uuid::new_v4().to_string(),
        user.user_id,
        chrono::Utc::now(),
    );
    state.db.create_workout(&workout).await?;

    tracing::info!(
        user_id = %workout.user_id,
        workout_id = %workout.id,
        category = %workout.category,
        calories = workout.calories_burned,
        "Workout logged"
    );

    Ok((
        StatusCode::CREATED,
        Json(AddWorkoutResponse {
            success: true,
            workout: workout.into(),
        }),
    ))
}
