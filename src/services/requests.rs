//! Maintenance requests service

use serde_json::Value;

use crate::{
    error::AppResult,
    models::{fields, Record, RequestType, Stage, StageGroups},
    repository::{Collection, Repository},
};

use super::{enrichment::EnrichmentResolver, stages};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Record>> {
        Ok(self.repository.list(Collection::Requests).await)
    }

    /// Create a request.
    ///
    /// Stage defaults to New and type to Corrective; caller values for either
    /// are stored as given. Category and team are copied from the referenced
    /// equipment under the same lock as the insert.
    pub async fn create(&self, data: Record) -> AppResult<Record> {
        let mut draft: Record = [
            (fields::STAGE, Value::from(Stage::default().as_str())),
            (fields::TYPE, Value::from(RequestType::default().as_str())),
        ]
        .into_iter()
        .collect();
        draft.merge(data);

        let mut store = self.repository.write().await;
        let draft = EnrichmentResolver::new(&store).enrich(draft);
        let request = store.insert(Collection::Requests, draft);

        tracing::info!("Created request {:?} in stage {:?}", request.id(), request.get(fields::STAGE));
        Ok(request)
    }

    pub async fn update(&self, id: &str, data: Record) -> AppResult<Record> {
        let request = self.repository.update(Collection::Requests, id, data).await?;
        tracing::info!("Updated request {}", id);
        Ok(request)
    }

    /// Requests bucketed by stage for the kanban board
    pub async fn group_by_stage(&self) -> AppResult<StageGroups> {
        let store = self.repository.read().await;
        Ok(stages::group_by_stage(store.records(Collection::Requests)))
    }
}
