//! Stage aggregation: kanban grouping, per-stage counts and statistics.
//!
//! Every function here is a pure read over the store. A request whose
//! `stage` is not one of the four known labels belongs to no bucket and no
//! stage count, but it still counts toward the request total.

use crate::{
    models::{fields, BoardColumn, RequestCard, Record, RequestType, Stage, StageCounts, StageGroups, Stats},
    repository::{Collection, Store},
};

use super::enrichment::EnrichmentResolver;

fn stage_of(request: &Record) -> Option<Stage> {
    request.get_str(fields::STAGE).and_then(Stage::from_label)
}

/// Partition requests into the four stage buckets, keeping their order
pub fn group_by_stage<'a>(requests: impl IntoIterator<Item = &'a Record>) -> StageGroups {
    let mut groups = StageGroups::default();
    for request in requests {
        if let Some(stage) = stage_of(request) {
            groups.bucket_mut(stage).push(request.clone());
        }
    }
    groups
}

/// Count requests per stage
pub fn stage_counts<'a>(requests: impl IntoIterator<Item = &'a Record>) -> StageCounts {
    let mut counts = StageCounts::default();
    for stage in requests.into_iter().filter_map(stage_of) {
        match stage {
            Stage::New => counts.new += 1,
            Stage::InProgress => counts.in_progress += 1,
            Stage::Repaired => counts.repaired += 1,
            Stage::Scrap => counts.scrap += 1,
        }
    }
    counts
}

/// Collection totals plus per-stage request counts
pub fn compute_stats(store: &Store) -> Stats {
    Stats {
        total_equipment: store.count(Collection::Equipment),
        total_teams: store.count(Collection::Teams),
        total_requests: store.count(Collection::Requests),
        requests_by_stage: stage_counts(store.records(Collection::Requests)),
    }
}

/// Kanban columns with display cards, in stage order
pub fn board(store: &Store) -> Vec<BoardColumn> {
    let groups = group_by_stage(store.records(Collection::Requests));
    let resolver = EnrichmentResolver::new(store);

    Stage::ALL
        .into_iter()
        .map(|stage| {
            let cards: Vec<RequestCard> = groups
                .bucket(stage)
                .iter()
                .map(|request| card(&resolver, request))
                .collect();
            BoardColumn {
                stage,
                count: cards.len(),
                cards,
            }
        })
        .collect()
}

fn card(resolver: &EnrichmentResolver<'_>, request: &Record) -> RequestCard {
    let owned = |key: &str| request.get_str(key).map(str::to_owned);

    RequestCard {
        id: owned(fields::ID),
        subject: owned(fields::SUBJECT),
        equipment_name: resolver.equipment_label(request).to_string(),
        date: owned(fields::SCHEDULED_DATE).or_else(|| owned(fields::CREATED_AT)),
        request_type: owned(fields::TYPE).unwrap_or_else(|| RequestType::default().to_string()),
        assignee_initial: request
            .get_str(fields::ASSIGNED_TO)
            .and_then(|name| name.chars().next())
            .map(|initial| initial.to_uppercase().collect()),
    }
}
