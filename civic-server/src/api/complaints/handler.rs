//! Complaint API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::core::AppState;
use crate::services::ComplaintService;
use crate::utils::AppResult;
use shared::models::{
    Complaint as ApiComplaint, ComplaintCreate, StatusUpdateBody, StatusUpdateRequest,
};

/// GET /complaints - list all complaints
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ApiComplaint>>> {
    let service = ComplaintService::new(state.db.clone());
    let complaints = service.list().await?;
    Ok(Json(complaints.into_iter().map(Into::into).collect()))
}

/// POST /complaints - file a new complaint
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ComplaintCreate>,
) -> AppResult<impl IntoResponse> {
    let service = ComplaintService::new(state.db.clone());
    let complaint = service.create(payload).await?;

    tracing::info!(
        issue_type = %complaint.issue_type,
        id = ?complaint.id,
        "Complaint filed"
    );

    Ok((StatusCode::CREATED, Json(ApiComplaint::from(complaint))))
}

/// POST /complaints/update-status - change a complaint's status
pub async fn update_status(
    State(state): State<AppState>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<ApiComplaint>> {
    let service = ComplaintService::new(state.db.clone());
    let complaint = service
        .update_status(payload.id.as_deref(), payload.status.as_deref())
        .await?;
    Ok(Json(complaint.into()))
}

/// PUT /complaints/{id} - change a complaint's status (path-addressed form)
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateBody>,
) -> AppResult<Json<ApiComplaint>> {
    let service = ComplaintService::new(state.db.clone());
    let complaint = service
        .update_status(Some(&id), payload.status.as_deref())
        .await?;
    Ok(Json(complaint.into()))
}
