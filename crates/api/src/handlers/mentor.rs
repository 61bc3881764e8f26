//! The mentor's own mentee/issue/report operations

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use db::entity::{issues, mentees, IssueStatus};
use registry::{BulkOutcome, MenteeRecord, MenteeWithIssues, NewMentee, RegistryError};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{error::ApiError, extract::AuthMentor, AppState};

pub async fn list_mentees(
    State(state): State<AppState>,
    mentor: AuthMentor,
) -> Result<Json<Vec<MenteeWithIssues>>, ApiError> {
    Ok(Json(state.registry.list_mentees(mentor.mentor_id).await?))
}

pub async fn add_mentee(
    State(state): State<AppState>,
    mentor: AuthMentor,
    Json(req): Json<NewMentee>,
) -> Result<(StatusCode, Json<mentees::Model>), ApiError> {
    let mentee = state.registry.create_mentee(mentor.mentor_id, req).await?;
    Ok((StatusCode::CREATED, Json(mentee)))
}

#[derive(Debug, Deserialize)]
pub struct BulkRequest {
    pub mentees: Vec<MenteeRecord>,
}

pub async fn add_bulk_mentees(
    State(state): State<AppState>,
    mentor: AuthMentor,
    Json(req): Json<BulkRequest>,
) -> Result<Json<BulkOutcome>, ApiError> {
    Ok(Json(
        state
            .registry
            .bulk_create_mentees(mentor.mentor_id, req.mentees)
            .await?,
    ))
}

pub async fn delete_mentee(
    State(state): State<AppState>,
    mentor: AuthMentor,
    Path(mentee_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state
        .registry
        .delete_mentee(mentor.mentor_id, mentee_id)
        .await?;
    Ok(Json(json!({ "message": "Mentee deleted successfully" })))
}

pub async fn delete_all_mentees(
    State(state): State<AppState>,
    mentor: AuthMentor,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.registry.delete_all_mentees(mentor.mentor_id).await?;
    Ok(Json(json!({
        "message": "All mentees and their issues deleted successfully",
        "deletedCount": deleted,
    })))
}

#[derive(Debug, Deserialize)]
pub struct AddIssueRequest {
    pub description: String,
}

pub async fn add_issue(
    State(state): State<AppState>,
    mentor: AuthMentor,
    Path(mentee_id): Path<Uuid>,
    Json(req): Json<AddIssueRequest>,
) -> Result<(StatusCode, Json<issues::Model>), ApiError> {
    let issue = state
        .registry
        .add_issue(mentor.mentor_id, mentee_id, &req.description)
        .await?;
    Ok((StatusCode::CREATED, Json(issue)))
}

/// Status is typed, so any value outside {pending, solved} never gets past
/// deserialization and the stored record stays untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateIssueRequest {
    pub status: IssueStatus,
}

pub async fn update_issue_status(
    State(state): State<AppState>,
    mentor: AuthMentor,
    Path(issue_id): Path<Uuid>,
    Json(req): Json<UpdateIssueRequest>,
) -> Result<Json<issues::Model>, ApiError> {
    let issue = state
        .registry
        .update_issue_status(mentor.mentor_id, issue_id, req.status)
        .await?;
    Ok(Json(issue))
}

pub async fn delete_issue(
    State(state): State<AppState>,
    mentor: AuthMentor,
    Path((mentee_id, issue_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, ApiError> {
    state
        .registry
        .delete_issue(mentor.mentor_id, mentee_id, issue_id)
        .await?;
    Ok(Json(json!({ "message": "Issue deleted successfully" })))
}

pub async fn mentor_report(
    State(state): State<AppState>,
    mentor: AuthMentor,
) -> Result<impl IntoResponse, ApiError> {
    let overview = state.registry.mentor_overview(mentor.mentor_id).await?;
    let bytes = report::mentor_report(&overview)?;
    Ok(pdf_response("mentor-report.pdf", bytes))
}

pub async fn mentee_report(
    State(state): State<AppState>,
    mentor: AuthMentor,
    Path(mentee_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let mentee = state.registry.mentee_with_issues(mentee_id).await?;
    if mentee.mentee.mentor_id != mentor.mentor_id {
        return Err(RegistryError::NotFound("Mentee not found".to_string()).into());
    }
    let bytes = report::mentee_report(&mentee)?;
    Ok(pdf_response("mentee-report.pdf", bytes))
}

fn pdf_response(filename: &str, bytes: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
}
