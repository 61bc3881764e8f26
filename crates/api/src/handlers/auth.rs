//! Registration and login

use auth::{hash_password, verify_password, AuthError};
use axum::{extract::State, http::StatusCode, Json};
use db::entity::{mentors, MentorRole};
use registry::{NewMentor, RegistryError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default = "default_role")]
    pub role: MentorRole,
}

fn default_department() -> String {
    "General".to_string()
}

fn default_role() -> MentorRole {
    MentorRole::Mentor
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Option<MentorRole>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub mentor: mentors::Model,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if req.password.trim().is_empty() {
        return Err(RegistryError::Validation("All fields are required".to_string()).into());
    }

    let password_hash = hash_password(&req.password)?;
    state
        .registry
        .register_mentor(NewMentor {
            name: req.name,
            email: req.email,
            password_hash,
            department: req.department,
            role: req.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Mentor registered successfully" })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let mentor = state
        .registry
        .find_mentor_by_email(&req.email)
        .await?
        .ok_or_else(|| RegistryError::NotFound("User not found".to_string()))?;

    if let Some(requested) = req.role {
        if mentor.role != requested {
            return Err(AuthError::RoleMismatch.into());
        }
    }

    if !verify_password(&req.password, &mentor.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(mentor.id, mentor.role)?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        mentor,
    }))
}
