// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard aggregation.
//!
//! Builds, for one user and one reference day:
//! 1. Today's calorie total, workout count and per-workout average
//! 2. Calories per category for today
//! 3. A seven-day trailing calorie series ending today
//!
//! Today's totals use the half-open window `[midnight, next midnight)`.
//! Each day of the weekly series uses the closed window
//! `[00:00:00.000, 23:59:59.999]`.

use std::sync::Arc;

use chrono::{Days, NaiveDate, TimeZone};

use crate::db::{group_calories_by_category, FitnessStore, TimeWindow};
use crate::error::{AppError, Result};
use crate::models::{
    CategoryCalories, DashboardResponse, DayWorkoutsResponse, User, WeeklyData, Workout,
    WorkoutResponse,
};
use crate::time_utils::{day_window_exclusive, day_window_inclusive, weekday_label};

/// Number of days in the trailing series, today included.
pub const WEEKLY_DAYS: u64 = 7;

/// Every time window a dashboard needs, resolved up front for one zone.
#[derive(Debug, Clone)]
pub struct DashboardWindows {
    pub today: TimeWindow,
    /// Oldest first; the last entry is today.
    pub week: Vec<(String, TimeWindow)>,
}

impl DashboardWindows {
    pub fn for_date<Tz: TimeZone>(tz: &Tz, today: NaiveDate) -> Self {
        let week = (0..WEEKLY_DAYS)
            .rev()
            .map(|days_back| {
                let day = today.checked_sub_days(Days::new(days_back)).unwrap_or(today);
                (weekday_label(day), day_window_inclusive(tz, day))
            })
            .collect();

        Self {
            today: day_window_exclusive(tz, today),
            week,
        }
    }
}

/// Computes dashboard views on top of a [`FitnessStore`].
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn FitnessStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn FitnessStore>) -> Self {
        Self { store }
    }

    async fn require_user(&self, user_id: &str) -> Result<User> {
        self.store
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Build the full dashboard for `user_id`.
    pub async fn build(
        &self,
        user_id: &str,
        windows: &DashboardWindows,
    ) -> Result<DashboardResponse> {
        self.require_user(user_id).await?;

        let today = self.store.find_workouts(user_id, &windows.today).await?;
        let total_calories_burnt: f64 = today.iter().map(Workout::calories).sum();
        let total_workouts = today.len() as u64;
        let avg_calories_burnt_per_workout = if total_workouts > 0 {
            (total_calories_burnt / total_workouts as f64).round() as i64
        } else {
            0
        };

        let pie_chart_data = group_calories_by_category(&today)
            .into_iter()
            .map(|(category, value)| CategoryCalories::new(category, value))
            .collect();

        let mut weekly_data = WeeklyData::default();
        for (label, window) in &windows.week {
            let calories = self.store.sum_calories(user_id, window).await?;
            weekly_data.labels.push(label.clone());
            weekly_data.calories.push(calories);
        }

        tracing::debug!(
            user_id,
            total_workouts,
            total_calories_burnt,
            "Dashboard computed"
        );

        Ok(DashboardResponse {
            total_calories_burnt,
            total_workouts,
            avg_calories_burnt_per_workout,
            pie_chart_data,
            weekly_data,
        })
    }

    /// Workouts for one day with the sum of their stored `calories_burned`.
    pub async fn workouts_for_day(
        &self,
        user_id: &str,
        window: &TimeWindow,
    ) -> Result<DayWorkoutsResponse> {
        self.require_user(user_id).await?;

        let workouts = self.store.find_workouts(user_id, window).await?;
        let total_calories_burnt = workouts.iter().map(|w| w.calories_burned).sum();

        tracing::debug!(
            user_id,
            count = workouts.len(),
            total_calories_burnt,
            "Fetched workouts for day"
        );

        Ok(DayWorkoutsResponse {
            todays_workouts: workouts.into_iter().map(WorkoutResponse::from).collect(),
            total_calories_burnt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDb;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const USER: &str = "user-1";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: NaiveDate, h: u32, min: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&day.and_hms_opt(h, min, 0).unwrap())
    }

    fn user() -> User {
        User {
            id: USER.to_string(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            img: None,
            created_at: "2024-01-15T10:00:00Z".to_string(),
        }
    }

    async fn add(
        db: &MemoryDb,
        id: &str,
        category: &str,
        duration: u32,
        weight: f64,
        when: DateTime<Utc>,
    ) {
        let workout = Workout {
            id: id.to_string(),
            user_id: USER.to_string(),
            category: category.to_string(),
            workout_name: "Test".to_string(),
            sets: 1,
            reps: 1,
            weight,
            duration,
            date: when,
            calories_burned: Workout::calories_for(duration, weight),
        };
        db.create_workout(&workout).await.unwrap();
    }

    async fn setup() -> (MemoryDb, DashboardService) {
        let db = MemoryDb::new();
        db.create_user(&user()).await.unwrap();
        let service = DashboardService::new(Arc::new(db.clone()));
        (db, service)
    }

    #[tokio::test]
    async fn test_single_workout_today() {
        let (db, service) = setup().await;
        let today = date(2024, 1, 17);
        add(&db, "w1", "Cardio", 30, 2.5, at(today, 9, 0)).await;

        let dashboard = service
            .build(USER, &DashboardWindows::for_date(&Utc, today))
            .await
            .unwrap();

        assert_eq!(dashboard.total_calories_burnt, 375.0);
        assert_eq!(dashboard.total_workouts, 1);
        assert_eq!(dashboard.avg_calories_burnt_per_workout, 375);
        assert_eq!(
            dashboard.pie_chart_data,
            vec![CategoryCalories::new("Cardio".to_string(), 375.0)]
        );
    }

    #[tokio::test]
    async fn test_empty_day_is_zero() {
        let (_db, service) = setup().await;

        let dashboard = service
            .build(USER, &DashboardWindows::for_date(&Utc, date(2024, 1, 17)))
            .await
            .unwrap();

        assert_eq!(dashboard.total_calories_burnt, 0.0);
        assert_eq!(dashboard.total_workouts, 0);
        assert_eq!(dashboard.avg_calories_burnt_per_workout, 0);
        assert!(dashboard.pie_chart_data.is_empty());
        assert_eq!(dashboard.weekly_data.calories, vec![0.0; 7]);
    }

    #[tokio::test]
    async fn test_average_is_rounded() {
        let (db, service) = setup().await;
        let today = date(2024, 1, 17);
        add(&db, "w1", "Legs", 1, 1.0, at(today, 8, 0)).await; // 5
        add(&db, "w2", "Legs", 1, 1.2, at(today, 9, 0)).await; // 6
        add(&db, "w3", "Back", 1, 1.0, at(today, 10, 0)).await; // 5

        let dashboard = service
            .build(USER, &DashboardWindows::for_date(&Utc, today))
            .await
            .unwrap();

        assert_eq!(dashboard.total_workouts, 3);
        assert_eq!(dashboard.avg_calories_burnt_per_workout, 5);
    }

    #[tokio::test]
    async fn test_category_breakdown_sums_to_total() {
        let (db, service) = setup().await;
        let today = date(2024, 1, 17);
        add(&db, "w1", "Legs", 45, 60.0, at(today, 8, 0)).await;
        add(&db, "w2", "Back", 30, 40.0, at(today, 9, 0)).await;
        add(&db, "w3", "Legs", 10, 20.0, at(today, 10, 0)).await;
        // Yesterday: excluded from today's views
        add(&db, "w4", "Arms", 10, 10.0, at(date(2024, 1, 16), 10, 0)).await;

        let dashboard = service
            .build(USER, &DashboardWindows::for_date(&Utc, today))
            .await
            .unwrap();

        let labels: Vec<&str> = dashboard
            .pie_chart_data
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Back", "Legs"]);
        for slice in &dashboard.pie_chart_data {
            assert_eq!(slice.id, slice.label);
        }

        let sum: f64 = dashboard.pie_chart_data.iter().map(|c| c.value).sum();
        assert_eq!(sum, dashboard.total_calories_burnt);
        assert_eq!(dashboard.total_calories_burnt, 13_500.0 + 6_000.0 + 1_000.0);
    }

    #[tokio::test]
    async fn test_today_excludes_next_midnight() {
        let (db, service) = setup().await;
        let today = date(2024, 1, 17);
        add(&db, "w1", "Legs", 10, 1.0, at(today, 0, 0)).await;
        add(&db, "w2", "Legs", 10, 1.0, at(date(2024, 1, 18), 0, 0)).await;

        let dashboard = service
            .build(USER, &DashboardWindows::for_date(&Utc, today))
            .await
            .unwrap();

        assert_eq!(dashboard.total_workouts, 1);
        assert_eq!(dashboard.total_calories_burnt, 50.0);
    }

    #[tokio::test]
    async fn test_weekly_series() {
        let (db, service) = setup().await;
        // Sunday
        let today = date(2024, 1, 21);
        add(&db, "w1", "Legs", 10, 1.0, at(date(2024, 1, 15), 12, 0)).await;
        add(&db, "w2", "Legs", 20, 1.0, at(date(2024, 1, 18), 7, 30)).await;
        add(&db, "w3", "Legs", 30, 1.0, at(today, 18, 0)).await;
        // Eight days back: outside the series
        add(&db, "w4", "Legs", 40, 1.0, at(date(2024, 1, 14), 12, 0)).await;

        let dashboard = service
            .build(USER, &DashboardWindows::for_date(&Utc, today))
            .await
            .unwrap();

        assert_eq!(
            dashboard.weekly_data.labels,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(
            dashboard.weekly_data.calories,
            vec![50.0, 0.0, 0.0, 100.0, 0.0, 0.0, 150.0]
        );
    }

    #[tokio::test]
    async fn test_weekly_day_includes_last_millisecond() {
        let (db, service) = setup().await;
        let today = date(2024, 1, 21);
        let last_ms = at(today, 23, 59) + Duration::milliseconds(59_999);
        add(&db, "w1", "Legs", 10, 1.0, last_ms).await;

        let windows = DashboardWindows::for_date(&Utc, today);
        let dashboard = service.build(USER, &windows).await.unwrap();

        assert_eq!(windows.week.len(), 7);
        assert_eq!(dashboard.weekly_data.calories[6], 50.0);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (_db, service) = setup().await;
        let windows = DashboardWindows::for_date(&Utc, date(2024, 1, 17));

        let err = service.build("nobody", &windows).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .workouts_for_day("nobody", &windows.today)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_workouts_for_day_sums_stored_calories() {
        let (db, service) = setup().await;
        let today = date(2024, 1, 17);
        add(&db, "w1", "Legs", 45, 60.0, at(today, 8, 0)).await;
        add(&db, "w2", "Back", 30, 2.5, at(today, 20, 0)).await;
        add(&db, "w3", "Back", 30, 2.5, at(date(2024, 1, 18), 0, 0)).await;

        let day = service
            .workouts_for_day(USER, &day_window_exclusive(&Utc, today))
            .await
            .unwrap();

        assert_eq!(day.todays_workouts.len(), 2);
        assert_eq!(day.todays_workouts[0].id, "w1");
        assert_eq!(day.total_calories_burnt, 13_500.0 + 375.0);
    }

    /// Delegates to a [`MemoryDb`] and counts workout queries.
    struct CountingStore {
        inner: MemoryDb,
        queries: AtomicUsize,
    }

    #[async_trait]
    impl FitnessStore for CountingStore {
        async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
            self.inner.get_user(user_id).await
        }

        async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
            self.inner.find_user_by_email(email).await
        }

        async fn create_user(&self, user: &User) -> Result<()> {
            self.inner.create_user(user).await
        }

        async fn create_workout(&self, workout: &Workout) -> Result<()> {
            self.inner.create_workout(workout).await
        }

        async fn find_workouts(&self, user_id: &str, window: &TimeWindow) -> Result<Vec<Workout>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.inner.find_workouts(user_id, window).await
        }
    }

    #[tokio::test]
    async fn test_build_reads_today_once() {
        let (db, _) = setup().await;
        let today = date(2024, 1, 17);
        add(&db, "w1", "Legs", 45, 60.0, at(today, 8, 0)).await;
        add(&db, "w2", "Back", 30, 2.5, at(today, 9, 0)).await;

        let store = Arc::new(CountingStore {
            inner: db,
            queries: AtomicUsize::new(0),
        });
        let service = DashboardService::new(store.clone());

        let dashboard = service
            .build(USER, &DashboardWindows::for_date(&Utc, today))
            .await
            .unwrap();

        // One read for today plus one per day of the weekly series
        assert_eq!(
            store.queries.load(Ordering::SeqCst),
            1 + WEEKLY_DAYS as usize
        );
        assert_eq!(dashboard.total_workouts, 2);
        assert_eq!(dashboard.total_calories_burnt, 13_500.0 + 375.0);
        assert_eq!(dashboard.pie_chart_data.len(), 2);
    }
}
