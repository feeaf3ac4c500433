use std::collections::HashMap;

use log::debug;

use crate::aggregation::aggregate;
use crate::api::{Actor, Dimension, Event, Repo, Result, Store};
use crate::criteria::RankingConfig;
use crate::ranking::{index_by_id, rank, Ranked};

/// Ranks users and repositories of a `Store` by their event activity.
pub struct Analytics<STORE>
where
    STORE: Store,
{
    store: STORE,
}

impl<STORE> Analytics<STORE>
where
    STORE: Store,
{
    pub fn new(store: STORE) -> Self {
        Analytics { store }
    }

    /// Top `config.limit` users by number of qualifying events they triggered.
    pub fn top_users(&self, config: &RankingConfig) -> Result<Vec<Ranked<Actor>>> {
        let counts = self.activity_counts(config, Dimension::Actor)?;
        let mut actors = index_by_id(self.store.query_actors(&|actor: &Actor| counts.contains_key(&actor.id))?);
        Ok(rank(&counts, config.limit, |id| actors.remove(&id)))
    }

    /// Top `config.limit` repositories by number of qualifying events they received.
    pub fn top_repos(&self, config: &RankingConfig) -> Result<Vec<Ranked<Repo>>> {
        let counts = self.activity_counts(config, Dimension::Repo)?;
        let mut repos = index_by_id(self.store.query_repos(&|repo: &Repo| counts.contains_key(&repo.id))?);
        Ok(rank(&counts, config.limit, |id| repos.remove(&id)))
    }

    fn activity_counts(&self, config: &RankingConfig, dimension: Dimension) -> Result<HashMap<u64, usize>> {
        let qualifying = config.qualifying_event_types();
        if qualifying.is_empty() {
            debug!("No qualifying event types, nothing to rank");
            return Ok(HashMap::new());
        }
        // Narrows the scan only, `aggregate` still checks the type of every event it counts.
        let events = self.store.query_events(&|event: &Event| qualifying.contains(&event.kind))?;
        debug!("Fetched {} events", events.len());
        Ok(aggregate(&events, &qualifying, |event| dimension.key_of(event)))
    }
}
