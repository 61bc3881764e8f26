//! Admin read surface (role-gated by the AdminMentor extractor)

use axum::{extract::State, Json};
use registry::{DashboardStats, MenteeWithIssues, MentorWithMentees};

use crate::{error::ApiError, extract::AdminMentor, AppState};

pub async fn list_mentors(
    State(state): State<AppState>,
    _admin: AdminMentor,
) -> Result<Json<Vec<MentorWithMentees>>, ApiError> {
    Ok(Json(state.registry.list_all_mentors().await?))
}

pub async fn list_mentees(
    State(state): State<AppState>,
    _admin: AdminMentor,
) -> Result<Json<Vec<MenteeWithIssues>>, ApiError> {
    Ok(Json(state.registry.list_all_mentees().await?))
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    _admin: AdminMentor,
) -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(state.registry.dashboard_stats().await?))
}
