use gh_analytics::api::{Actor, Commit, Event, EventType, Repo};
use serde::Deserialize;

/// Row of `actors.csv`.
#[derive(Deserialize, Debug)]
pub struct ActorRow {
    pub id: u64,
    pub username: String,
}

impl From<ActorRow> for Actor {
    fn from(row: ActorRow) -> Self {
        Actor::new(row.id, row.username)
    }
}

/// Row of `commits.csv`.
#[derive(Deserialize, Debug)]
pub struct CommitRow {
    pub sha: String,
    pub message: String,
    pub event_id: u64,
}

impl From<CommitRow> for Commit {
    fn from(row: CommitRow) -> Self {
        Commit::new(row.sha, row.message, row.event_id)
    }
}

/// Row of `events.csv`.
#[derive(Deserialize, Debug)]
pub struct EventRow {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub actor_id: u64,
    pub repo_id: u64,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        let kind = row
            .kind
            .parse::<EventType>()
            .unwrap_or_else(|_| EventType::Other(row.kind.clone()));
        Event::new(row.id, kind, row.actor_id, row.repo_id)
    }
}

/// Row of `repos.csv`.
#[derive(Deserialize, Debug)]
pub struct RepoRow {
    pub id: u64,
    pub name: String,
}

impl From<RepoRow> for Repo {
    fn from(row: RepoRow) -> Self {
        Repo::new(row.id, row.name)
    }
}
