//! HTTP API layer for Menteebook
//!
//! Routes mirror the original client contract under `/api/v1`:
//! auth (register/login), the mentor's own mentee/issue/report operations,
//! token-gated mentee reads, and the admin read surface.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod service;

pub use error::ApiError;
pub use service::{ServiceConfig, ServiceRunner};

use auth::TokenService;
use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use registry::MenteeRegistry;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: MenteeRegistry,
    pub tokens: TokenService,
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/v1/auth/register", post(handlers::auth::register))
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route(
            "/api/v1/mentor/mentees",
            get(handlers::mentor::list_mentees)
                .post(handlers::mentor::add_mentee)
                .delete(handlers::mentor::delete_all_mentees),
        )
        .route(
            "/api/v1/mentor/mentees/bulk",
            post(handlers::mentor::add_bulk_mentees),
        )
        .route(
            "/api/v1/mentor/mentees/{mentee_id}",
            delete(handlers::mentor::delete_mentee),
        )
        .route(
            "/api/v1/mentor/mentees/{mentee_id}/issues",
            post(handlers::mentor::add_issue),
        )
        .route(
            "/api/v1/mentor/mentees/{mentee_id}/issues/{issue_id}",
            delete(handlers::mentor::delete_issue),
        )
        .route(
            "/api/v1/mentor/issues/{issue_id}",
            put(handlers::mentor::update_issue_status),
        )
        .route("/api/v1/mentor/report", get(handlers::mentor::mentor_report))
        .route(
            "/api/v1/mentor/report/{mentee_id}",
            get(handlers::mentor::mentee_report),
        )
        .route("/api/v1/mentee/{mentee_id}", get(handlers::mentee::get_mentee))
        .route(
            "/api/v1/mentee/{mentee_id}/issues",
            get(handlers::mentee::get_mentee_issues),
        )
        .route("/api/v1/admin/mentors", get(handlers::admin::list_mentors))
        .route("/api/v1/admin/mentees", get(handlers::admin::list_mentees))
        .route("/api/v1/admin/stats", get(handlers::admin::dashboard_stats))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Menteebook API is running"
}

async fn not_found() -> (axum::http::StatusCode, Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Route not found" })),
    )
}
