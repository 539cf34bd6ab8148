//! Business logic services

pub mod enrichment;
pub mod equipment;
pub mod requests;
pub mod stages;
pub mod stats;
pub mod teams;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub teams: teams::TeamsService,
    pub requests: requests::RequestsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over one shared repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            teams: teams::TeamsService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
