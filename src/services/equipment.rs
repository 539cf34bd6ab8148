//! Equipment service

use crate::{
    error::AppResult,
    models::{fields, DeleteResponse, Record},
    repository::{Collection, Repository},
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Record>> {
        Ok(self.repository.list(Collection::Equipment).await)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Record> {
        self.repository.get(Collection::Equipment, id).await
    }

    pub async fn create(&self, data: Record) -> AppResult<Record> {
        let equipment = self.repository.insert(Collection::Equipment, data).await;
        tracing::info!("Created equipment {:?}", equipment.id());
        Ok(equipment)
    }

    pub async fn update(&self, id: &str, data: Record) -> AppResult<Record> {
        let equipment = self.repository.update(Collection::Equipment, id, data).await?;
        tracing::info!("Updated equipment {}", id);
        Ok(equipment)
    }

    /// Delete equipment. Requests that reference it keep the dangling id.
    pub async fn delete(&self, id: &str) -> AppResult<DeleteResponse> {
        self.repository.remove(Collection::Equipment, id).await?;
        tracing::info!("Deleted equipment {}", id);
        Ok(DeleteResponse {
            message: "Equipment deleted successfully".to_string(),
        })
    }

    /// Requests referencing this equipment, oldest first
    pub async fn requests(&self, id: &str) -> AppResult<Vec<Record>> {
        Ok(self
            .repository
            .filter_by_foreign_key(Collection::Requests, fields::EQUIPMENT_ID, id)
            .await)
    }
}
