// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness tracker: user accounts, a workout log and dashboard aggregation.
//!
//! This crate provides the backend API for logging workouts as free text
//! and summarizing calories burned per day, per category and per week.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use db::FitnessStore;
use services::DashboardService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Arc<dyn FitnessStore>,
    pub dashboard: DashboardService,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn FitnessStore>) -> Self {
        let dashboard = DashboardService::new(db.clone());
        Self {
            config,
            db,
            dashboard,
        }
    }
}
