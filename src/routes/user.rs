// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account routes: signup and login.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::user::normalize_email;
use crate::models::{User, UserResponse};
use crate::services::credentials::{hash_password, verify_password};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/signup", post(signup))
        .route("/api/user/login", post(login))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub img: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Session token plus the public user view.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

fn validation_error(errors: validator::ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field))
            })
        })
        .collect();
    messages.sort();
    AppError::Validation(messages.join("; "))
}

fn issue_token(state: &AppState, user: User) -> Result<Json<AuthResponse>> {
    let token = create_jwt(
        &user.id,
        &state.config.jwt_signing_key,
        state.config.token_ttl_days,
    )?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Register a new account.
async fn signup(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let Json(mut req) = body?;
    req.email = normalize_email(&req.email);
    req.name = req.name.trim().to_string();
    req.validate().map_err(validation_error)?;

    if state.db.find_user_by_email(&req.email).await?.is_some() {
        tracing::info!(email = %req.email, "Signup rejected: email already registered");
        return Err(AppError::Conflict("Email is already in use.".to_string()));
    }

    let password_hash = hash_password(req.password, state.config.bcrypt_cost).await?;

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        password_hash,
        img: req.img.filter(|img| !img.trim().is_empty()),
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    state.db.create_user(&user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    issue_token(&state, user)
}

/// Log in with email and password.
async fn login(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let Json(req) = body?;
    req.validate().map_err(validation_error)?;

    let email = normalize_email(&req.email);
    let user = state
        .db
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !verify_password(req.password, user.password_hash.clone()).await? {
        tracing::info!(user_id = %user.id, "Login rejected: incorrect password");
        return Err(AppError::Forbidden("Incorrect password".to_string()));
    }

    tracing::info!(user_id = %user.id, "User logged in");

    issue_token(&state, user)
}
