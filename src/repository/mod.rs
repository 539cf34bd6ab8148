//! Repository layer over the in-memory store

pub mod store;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{error::AppResult, models::Record};

pub use store::{Collection, Store};

/// Shared handle to the entity store.
///
/// One lock guards all three collections, so every operation is atomic
/// with respect to every other.
#[derive(Clone)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
}

impl Repository {
    /// Create a repository around an empty store
    pub fn new(instance_id: u16) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::new(instance_id))),
        }
    }

    /// Shared access for multi-collection reads
    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    /// Exclusive access for read-then-write sequences
    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }

    pub async fn insert(&self, collection: Collection, payload: Record) -> Record {
        self.store.write().await.insert(collection, payload)
    }

    pub async fn list(&self, collection: Collection) -> Vec<Record> {
        self.store.read().await.list(collection)
    }

    pub async fn get(&self, collection: Collection, id: &str) -> AppResult<Record> {
        self.store.read().await.get(collection, id).cloned()
    }

    pub async fn update(&self, collection: Collection, id: &str, patch: Record) -> AppResult<Record> {
        self.store.write().await.update(collection, id, patch)
    }

    pub async fn remove(&self, collection: Collection, id: &str) -> AppResult<Record> {
        self.store.write().await.remove(collection, id)
    }

    pub async fn filter_by_foreign_key(&self, collection: Collection, field: &str, value: &str) -> Vec<Record> {
        self.store
            .read()
            .await
            .filter_by_foreign_key(collection, field, value)
    }
}
