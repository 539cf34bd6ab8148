//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, requests, stats, teams};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "0.1.0",
        description = "Maintenance tracking REST API: equipment, teams and repair requests"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::list_equipment_requests,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        // Requests
        requests::list_requests,
        requests::create_request,
        requests::update_request,
        requests::requests_by_stage,
        // Stats
        stats::get_stats,
        stats::get_board,
    ),
    components(
        schemas(
            crate::models::Record,
            crate::models::Stage,
            crate::models::RequestType,
            crate::models::StageGroups,
            crate::models::StageCounts,
            crate::models::Stats,
            crate::models::BoardColumn,
            crate::models::RequestCard,
            crate::models::DeleteResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment management"),
        (name = "teams", description = "Maintenance teams"),
        (name = "requests", description = "Maintenance requests"),
        (name = "stats", description = "Statistics and kanban board")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
