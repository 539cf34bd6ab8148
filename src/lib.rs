//! GearGuard Maintenance Tracker
//!
//! REST JSON server for maintenance equipment, teams and repair requests,
//! with a kanban view of the request lifecycle.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the services over a fresh, empty store
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new(config.store.instance_id);
        Self {
            services: Arc::new(services::Services::new(repository)),
            config: Arc::new(config),
        }
    }
}
