//! Maintenance teams service

use crate::{
    error::AppResult,
    models::Record,
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Record>> {
        Ok(self.repository.list(Collection::Teams).await)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Record> {
        self.repository.get(Collection::Teams, id).await
    }

    pub async fn create(&self, data: Record) -> AppResult<Record> {
        let team = self.repository.insert(Collection::Teams, data).await;
        tracing::info!("Created team {:?}", team.id());
        Ok(team)
    }
}
