//! Request-scoped identity extraction
//!
//! The bearer token is decoded exactly once per request and the resulting
//! identity is passed explicitly into every registry call; handlers never
//! read ambient auth state.

use auth::AuthInfo;
use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use db::MentorRole;
use uuid::Uuid;

use crate::{error::ApiError, AppState};

/// An authenticated mentor (any role)
#[derive(Debug, Clone, Copy)]
pub struct AuthMentor {
    pub mentor_id: Uuid,
    pub role: MentorRole,
}

impl FromRequestParts<AppState> for AuthMentor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(ApiError::MissingToken)?;

        let AuthInfo { mentor_id, role } = state.tokens.verify(token)?;
        Ok(AuthMentor { mentor_id, role })
    }
}

/// An authenticated mentor whose role is admin
#[derive(Debug, Clone, Copy)]
pub struct AdminMentor {
    pub mentor_id: Uuid,
}

impl FromRequestParts<AppState> for AdminMentor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mentor = AuthMentor::from_request_parts(parts, state).await?;
        if mentor.role != MentorRole::Admin {
            return Err(ApiError::Auth(auth::AuthError::RoleMismatch));
        }
        Ok(AdminMentor {
            mentor_id: mentor.mentor_id,
        })
    }
}
