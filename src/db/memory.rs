// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process store for local development and tests.
//!
//! Data lives only as long as the process.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::db::{FitnessStore, TimeWindow};
use crate::error::AppError;
use crate::models::{User, Workout};

/// Map-backed store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<DashMap<String, User>>,
    workouts: Arc<DashMap<String, Workout>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FitnessStore for MemoryDb {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(user_id).map(|u| u.value().clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.value().clone()))
    }

    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn create_workout(&self, workout: &Workout) -> Result<(), AppError> {
        self.workouts.insert(workout.id.clone(), workout.clone());
        Ok(())
    }

    async fn find_workouts(
        &self,
        user_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Workout>, AppError> {
        let mut found: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|w| w.user_id == user_id && window.contains(&w.date))
            .map(|w| w.value().clone())
            .collect();
        found.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(found)
    }
}
