//! Derived views over the request collection: stage groups, statistics and
//! kanban board columns

use serde::Serialize;
use utoipa::ToSchema;

use super::{enums::Stage, record::Record};

/// Requests partitioned by stage, in kanban column order
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct StageGroups {
    #[serde(rename = "New")]
    pub new: Vec<Record>,
    #[serde(rename = "In Progress")]
    pub in_progress: Vec<Record>,
    #[serde(rename = "Repaired")]
    pub repaired: Vec<Record>,
    #[serde(rename = "Scrap")]
    pub scrap: Vec<Record>,
}

impl StageGroups {
    pub fn bucket(&self, stage: Stage) -> &[Record] {
        match stage {
            Stage::New => &self.new,
            Stage::InProgress => &self.in_progress,
            Stage::Repaired => &self.repaired,
            Stage::Scrap => &self.scrap,
        }
    }

    pub(crate) fn bucket_mut(&mut self, stage: Stage) -> &mut Vec<Record> {
        match stage {
            Stage::New => &mut self.new,
            Stage::InProgress => &mut self.in_progress,
            Stage::Repaired => &mut self.repaired,
            Stage::Scrap => &mut self.scrap,
        }
    }
}

/// Request counts per stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub new: usize,
    pub in_progress: usize,
    pub repaired: usize,
    pub scrap: usize,
}

impl StageCounts {
    pub fn get(&self, stage: Stage) -> usize {
        match stage {
            Stage::New => self.new,
            Stage::InProgress => self.in_progress,
            Stage::Repaired => self.repaired,
            Stage::Scrap => self.scrap,
        }
    }
}

/// Dashboard statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_equipment: usize,
    pub total_teams: usize,
    pub total_requests: usize,
    pub requests_by_stage: StageCounts,
}

/// One kanban column
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub stage: Stage,
    pub count: usize,
    pub cards: Vec<RequestCard>,
}

/// What a kanban card shows for one request
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestCard {
    pub id: Option<String>,
    pub subject: Option<String>,
    /// Name of the referenced equipment, or a placeholder when it is gone
    pub equipment_name: String,
    /// Scheduled date, falling back to the creation timestamp
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub request_type: String,
    /// Uppercased first letter of the assignee
    pub assignee_initial: Option<String>,
}

/// Deletion confirmation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}
