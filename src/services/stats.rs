//! Statistics and board service

use crate::{
    error::AppResult,
    models::{BoardColumn, Stats},
    repository::Repository,
};

use super::stages;

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Collection totals and per-stage request counts
    pub async fn compute(&self) -> AppResult<Stats> {
        let store = self.repository.read().await;
        let stats = stages::compute_stats(&store);
        tracing::debug!(
            "Stats: {} equipment, {} teams, {} requests",
            stats.total_equipment,
            stats.total_teams,
            stats.total_requests
        );
        Ok(stats)
    }

    /// Kanban board with resolved equipment labels
    pub async fn board(&self) -> AppResult<Vec<BoardColumn>> {
        let store = self.repository.read().await;
        Ok(stages::board(&store))
    }
}
