//! Maintenance request API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{Record, StageGroups},
};

/// List all requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "Request list", body = Vec<Record>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Record>>> {
    let requests = state.services.requests.list().await?;
    Ok(Json(requests))
}

/// Create request
///
/// Category and team are copied from the referenced equipment when it exists.
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = Record,
    responses(
        (status = 201, description = "Request created", body = Record)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<Record>, AppError>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let request = state.services.requests.create(data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Update request (shallow merge)
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    request_body = Record,
    responses(
        (status = 200, description = "Request updated", body = Record),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    WithRejection(Json(data), _): WithRejection<Json<Record>, AppError>,
) -> AppResult<Json<Record>> {
    let request = state.services.requests.update(&id, data).await?;
    Ok(Json(request))
}

/// Requests grouped into the four kanban stages
#[utoipa::path(
    get,
    path = "/requests/by-stage",
    tag = "requests",
    responses(
        (status = 200, description = "Requests by stage", body = StageGroups)
    )
)]
pub async fn requests_by_stage(
    State(state): State<crate::AppState>,
) -> AppResult<Json<StageGroups>> {
    let groups = state.services.requests.group_by_stage().await?;
    Ok(Json(groups))
}
