//! Maintenance team API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::Record,
};

/// List all teams
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "Team list", body = Vec<Record>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Record>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(teams))
}

/// Get team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = Record),
        (status = 404, description = "Team not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let team = state.services.teams.get_by_id(&id).await?;
    Ok(Json(team))
}

/// Create team
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = Record,
    responses(
        (status = 201, description = "Team created", body = Record)
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<Record>, AppError>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let team = state.services.teams.create(data).await?;
    Ok((StatusCode::CREATED, Json(team)))
}
