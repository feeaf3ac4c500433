use std::collections::HashSet;

use derive_more::Constructor;
use log::{debug, warn};

use crate::api::{EventType, SortCriterion};

/// Immutable ranking query configuration.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct RankingConfig {
    pub criteria: Vec<SortCriterion>,
    /// Event types qualifying regardless of `criteria`.
    pub event_types: Vec<EventType>,
    pub limit: usize,
}

impl RankingConfig {
    pub fn by_criteria(criteria: Vec<SortCriterion>, limit: usize) -> Self {
        RankingConfig::new(criteria, Vec::new(), limit)
    }

    pub fn by_event_types(event_types: Vec<EventType>, limit: usize) -> Self {
        RankingConfig::new(Vec::new(), event_types, limit)
    }

    pub fn qualifying_event_types(&self) -> HashSet<EventType> {
        let mut event_types = resolve(&self.criteria);
        event_types.extend(self.event_types.iter().cloned());
        debug!("Qualifying event types: {:?}", event_types);
        event_types
    }
}

pub fn event_type_for(criterion: &SortCriterion) -> Option<EventType> {
    match criterion {
        SortCriterion::CommitsPushed => Some(EventType::PushEvent),
        SortCriterion::PrCreated => Some(EventType::PullRequestEvent),
        SortCriterion::WatchActivity => Some(EventType::WatchEvent),
        SortCriterion::Unrecognized(_) => None,
    }
}

/// Union of the event types the `criteria` map to.
pub fn resolve(criteria: &[SortCriterion]) -> HashSet<EventType> {
    criteria
        .iter()
        .filter_map(|criterion| {
            let event_type = event_type_for(criterion);
            if event_type.is_none() {
                warn!("Ignoring {}", criterion);
            }
            event_type
        })
        .collect()
}

#[test]
fn resolve_union_test() {
    let event_types = resolve(&[SortCriterion::CommitsPushed, SortCriterion::PrCreated]);
    assert_eq!(
        event_types,
        HashSet::from([EventType::PushEvent, EventType::PullRequestEvent])
    );
}

#[test]
fn resolve_order_and_duplicates_test() {
    let forward = resolve(&[SortCriterion::WatchActivity, SortCriterion::CommitsPushed]);
    let backward = resolve(&[
        SortCriterion::CommitsPushed,
        SortCriterion::WatchActivity,
        SortCriterion::CommitsPushed,
    ]);
    assert_eq!(forward, backward);
    assert_eq!(forward.len(), 2);
}

#[test]
fn resolve_unrecognized_test() {
    let event_types = resolve(&[SortCriterion::Unrecognized("starsGiven".to_string())]);
    assert!(event_types.is_empty());
}

#[test]
fn config_escape_hatch_test() {
    let config = RankingConfig::new(
        vec![SortCriterion::PrCreated],
        vec![EventType::ForkEvent, EventType::Other("GollumEvent".to_string())],
        5,
    );
    assert_eq!(
        config.qualifying_event_types(),
        HashSet::from([
            EventType::PullRequestEvent,
            EventType::ForkEvent,
            EventType::Other("GollumEvent".to_string()),
        ])
    );
    assert_eq!(
        RankingConfig::by_event_types(vec![EventType::WatchEvent], 5).qualifying_event_types(),
        resolve(&[SortCriterion::WatchActivity])
    );
}
