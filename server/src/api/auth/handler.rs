//! Authentication Handlers
//!
//! Handles signup and signin

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::AppError;
use crate::core::ServerState;
use crate::db::models::{User, UserCreate};
use crate::db::repository::{RepoError, UserRepository};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_PASSWORD_LEN, validate_required_text,
};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub token: String,
    pub is_admin: bool,
    pub redirect_url: String,
}

/// Signup handler
///
/// The very first account becomes the administrator; everyone after is a
/// regular customer. The unique indexes on email/username are the real
/// constraint — the pre-checks below only buy friendlier messages.
pub async fn signup(
    State(state): State<ServerState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    validate_required_text(&req.email, "Email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.username, "Username", MAX_EMAIL_LEN)?;
    validate_required_text(&req.password, "Password", MAX_PASSWORD_LEN)?;

    let repo = UserRepository::new(state.db.clone());

    if repo.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("Email already registered."));
    }
    if repo.find_by_username(&req.username).await?.is_some() {
        return Err(AppError::conflict("Username already taken."));
    }

    let is_admin = repo.count().await? == 0;

    // Hash exactly once, here
    let hash_pass = User::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let user = repo
        .create(UserCreate {
            email: req.email.clone(),
            username: req.username.clone(),
            hash_pass,
            is_admin,
        })
        .await
        .map_err(|e| match e {
            // Lost the race against a concurrent signup
            RepoError::Duplicate(msg) if msg.contains("user_username") => {
                AppError::conflict("Username already taken.")
            }
            RepoError::Duplicate(_) => AppError::conflict("Email already registered."),
            other => other.into(),
        })?;

    tracing::info!(
        user_id = %user.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
        username = %user.username,
        is_admin = user.is_admin,
        "User registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully.".to_string(),
            is_admin: user.is_admin,
        }),
    ))
}

/// Signin handler
///
/// Unknown email and wrong password produce the identical error after the
/// same fixed delay, so the response leaks nothing about which part failed.
pub async fn signin(
    State(state): State<ServerState>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, AppError> {
    validate_required_text(&req.email, "Email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.password, "Password", MAX_PASSWORD_LEN)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Signin failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(email = %req.email, "Signin failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&user_id, user.is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %user_id,
        username = %user.username,
        is_admin = user.is_admin,
        "User signed in"
    );

    let redirect_url = if user.is_admin {
        "/admin-dashboard"
    } else {
        "/user-dashboard"
    };

    Ok(Json(SigninResponse {
        token,
        is_admin: user.is_admin,
        redirect_url: redirect_url.to_string(),
    }))
}
