//! Statistics and board endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{BoardColumn, Stats},
};

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Totals and requests per stage", body = Stats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<Stats>> {
    let stats = state.services.stats.compute().await?;
    Ok(Json(stats))
}

/// Get the kanban board
#[utoipa::path(
    get,
    path = "/board",
    tag = "stats",
    responses(
        (status = 200, description = "Kanban columns in stage order", body = Vec<BoardColumn>)
    )
)]
pub async fn get_board(State(state): State<crate::AppState>) -> AppResult<Json<Vec<BoardColumn>>> {
    let board = state.services.stats.board().await?;
    Ok(Json(board))
}
