use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::directory::{Directory, DirectoryError};
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match self {
            DirectoryError::NotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadyRegistered | DirectoryError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
            DirectoryError::DuplicateSeedParticipant { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!("Rejected request: {}", self);
        (status, Json(ErrorDetail::new(self.to_string()))).into_response()
    }
}

/// Malformed or missing query parameters, reported as `{"detail": ...}`.
fn query_rejection(rejection: QueryRejection) -> Response {
    let detail = rejection.body_text();
    tracing::warn!("Rejected query: {}", detail);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorDetail::new(detail)),
    )
        .into_response()
}

// ============================================================
// Navigation & Health
// ============================================================

pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Activities
// ============================================================

pub async fn list_activities(State(directory): State<Directory>) -> Json<ActivityMap> {
    let activities = directory.list_activities();
    tracing::debug!("Listing {} activities", activities.len());
    Json(activities)
}

pub async fn signup(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, Response> {
    let Query(query) = query.map_err(query_rejection)?;
    directory
        .signup(&name, &query.email)
        .map(|message| Json(MessageResponse::new(message)))
        .map_err(IntoResponse::into_response)
}

pub async fn unregister(
    State(directory): State<Directory>,
    Path(name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, Response> {
    let Query(query) = query.map_err(query_rejection)?;
    directory
        .unregister(&name, &query.email)
        .map(|message| Json(MessageResponse::new(message)))
        .map_err(IntoResponse::into_response)
}
