//! Token-gated mentee reads

use axum::{
    extract::{Path, State},
    Json,
};
use db::entity::issues;
use registry::MenteeWithIssues;
use uuid::Uuid;

use crate::{error::ApiError, extract::AuthMentor, AppState};

pub async fn get_mentee(
    State(state): State<AppState>,
    _mentor: AuthMentor,
    Path(mentee_id): Path<Uuid>,
) -> Result<Json<MenteeWithIssues>, ApiError> {
    Ok(Json(state.registry.mentee_with_issues(mentee_id).await?))
}

pub async fn get_mentee_issues(
    State(state): State<AppState>,
    _mentor: AuthMentor,
    Path(mentee_id): Path<Uuid>,
) -> Result<Json<Vec<issues::Model>>, ApiError> {
    let mentee = state.registry.mentee_with_issues(mentee_id).await?;
    Ok(Json(mentee.issues))
}
