use std::fmt::Display;

use derive_more::Constructor;
use strum_macros::EnumString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Store query failed: {0}")]
    StoreQuery(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Anything the ranking can resolve a group key back to.
pub trait Entity {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Actor {
    pub id: u64,
    pub username: String,
}

impl Entity for Actor {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Repo {
    pub id: u64,
    pub name: String,
}

impl Entity for Repo {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Event {
    pub id: u64,
    pub kind: EventType,
    pub actor_id: u64,
    pub repo_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub event_id: u64,
}

/// GitHub event tag. Unknown tags are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum EventType {
    PushEvent,
    PullRequestEvent,
    WatchEvent,
    CreateEvent,
    DeleteEvent,
    ForkEvent,
    IssuesEvent,
    IssueCommentEvent,
    #[strum(default)]
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::PushEvent => "PushEvent",
            EventType::PullRequestEvent => "PullRequestEvent",
            EventType::WatchEvent => "WatchEvent",
            EventType::CreateEvent => "CreateEvent",
            EventType::DeleteEvent => "DeleteEvent",
            EventType::ForkEvent => "ForkEvent",
            EventType::IssuesEvent => "IssuesEvent",
            EventType::IssueCommentEvent => "IssueCommentEvent",
            EventType::Other(tag) => tag,
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named ranking basis. Text that names no known criterion parses into
/// `Unrecognized` and qualifies no event type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SortCriterion {
    CommitsPushed,
    PrCreated,
    WatchActivity,
    #[strum(default)]
    Unrecognized(String),
}

impl Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortCriterion::CommitsPushed => f.write_str("commits pushed"),
            SortCriterion::PrCreated => f.write_str("PRs created"),
            SortCriterion::WatchActivity => f.write_str("watch activity"),
            SortCriterion::Unrecognized(name) => write!(f, "unrecognized criterion '{}'", name),
        }
    }
}

/// Event attribute the activity is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Dimension {
    #[strum(serialize = "users", serialize = "actors")]
    Actor,
    #[strum(serialize = "repos", serialize = "repositories")]
    Repo,
}

impl Dimension {
    pub fn key_of(&self, event: &Event) -> u64 {
        match self {
            Dimension::Actor => event.actor_id,
            Dimension::Repo => event.repo_id,
        }
    }
}

/// Read-only source of deduplicated entities.
///
/// Every query returns all records satisfying `predicate` in store-defined order.
pub trait Store: Send + Sync {
    fn query_actors(&self, predicate: &dyn Fn(&Actor) -> bool) -> Result<Vec<Actor>>;

    fn query_events(&self, predicate: &dyn Fn(&Event) -> bool) -> Result<Vec<Event>>;

    fn query_repos(&self, predicate: &dyn Fn(&Repo) -> bool) -> Result<Vec<Repo>>;
}

#[test]
fn event_type_parse_test() {
    assert_eq!("PushEvent".parse::<EventType>().unwrap(), EventType::PushEvent);
    assert_eq!(
        "GollumEvent".parse::<EventType>().unwrap(),
        EventType::Other("GollumEvent".to_string())
    );
    assert_eq!(EventType::Other("GollumEvent".to_string()).to_string(), "GollumEvent");
}

#[test]
fn sort_criterion_parse_test() {
    assert_eq!("commitsPushed".parse::<SortCriterion>().unwrap(), SortCriterion::CommitsPushed);
    assert_eq!("prCreated".parse::<SortCriterion>().unwrap(), SortCriterion::PrCreated);
    assert_eq!("watchActivity".parse::<SortCriterion>().unwrap(), SortCriterion::WatchActivity);
    assert_eq!(
        "starsGiven".parse::<SortCriterion>().unwrap(),
        SortCriterion::Unrecognized("starsGiven".to_string())
    );
}

#[test]
fn dimension_key_test() {
    let event = Event::new(1, EventType::PushEvent, 10, 20);
    assert_eq!("users".parse::<Dimension>().unwrap().key_of(&event), 10);
    assert_eq!("repos".parse::<Dimension>().unwrap().key_of(&event), 20);
    assert!("commits".parse::<Dimension>().is_err());
}
