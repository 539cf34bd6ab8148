//! Data models for GearGuard

pub mod board;
pub mod enums;
pub mod record;

// Re-export commonly used types
pub use board::{BoardColumn, DeleteResponse, RequestCard, StageCounts, StageGroups, Stats};
pub use enums::{RequestType, Stage};
pub use record::{fields, Record};
