//! Entity store backed by the `actors.csv`, `commits.csv`, `events.csv` and `repos.csv` exports.

mod loader;
mod payload;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gh_analytics::api::{Actor, Commit, Event, Repo, Store};
use log::info;
use thiserror::Error;

use crate::loader::{dedup_by_key, load_rows};
use crate::payload::{ActorRow, CommitRow, EventRow, RepoRow};

pub const ACTORS_FILE: &str = "actors.csv";
pub const COMMITS_FILE: &str = "commits.csv";
pub const EVENTS_FILE: &str = "events.csv";
pub const REPOS_FILE: &str = "repos.csv";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open {file}: {source}")]
    Open {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Deduplicated, immutable snapshot of the four CSV exports.
#[derive(Debug, Default)]
pub struct CsvStore {
    actors: Vec<Actor>,
    commits: Vec<Commit>,
    events: Vec<Event>,
    repos: Vec<Repo>,
}

impl CsvStore {
    /// Loads the four CSV files from `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<CsvStore> {
        let dir = dir.as_ref();
        info!("Loading store from {}", dir.display());
        CsvStore::from_readers(
            open(dir, ACTORS_FILE)?,
            open(dir, COMMITS_FILE)?,
            open(dir, EVENTS_FILE)?,
            open(dir, REPOS_FILE)?,
        )
    }

    pub fn from_readers<A, C, E, R>(actors: A, commits: C, events: E, repos: R) -> Result<CsvStore>
    where
        A: Read,
        C: Read,
        E: Read,
        R: Read,
    {
        let actors = load_rows::<ActorRow, Actor>(actors, ACTORS_FILE)?;
        let commits = load_rows::<CommitRow, Commit>(commits, COMMITS_FILE)?;
        let events = load_rows::<EventRow, Event>(events, EVENTS_FILE)?;
        let repos = load_rows::<RepoRow, Repo>(repos, REPOS_FILE)?;
        let store = CsvStore {
            actors: dedup_by_key(actors, |actor| actor.id),
            commits: dedup_by_key(commits, |commit| commit.sha.clone()),
            events: dedup_by_key(events, |event| event.id),
            repos: dedup_by_key(repos, |repo| repo.id),
        };
        info!(
            "Loaded {} actors, {} commits, {} events, {} repos",
            store.actors.len(),
            store.commits.len(),
            store.events.len(),
            store.repos.len()
        );
        Ok(store)
    }

    pub fn query_commits(&self, predicate: &dyn Fn(&Commit) -> bool) -> Vec<Commit> {
        scan(&self.commits, predicate)
    }
}

impl Store for CsvStore {
    fn query_actors(&self, predicate: &dyn Fn(&Actor) -> bool) -> gh_analytics::api::Result<Vec<Actor>> {
        Ok(scan(&self.actors, predicate))
    }

    fn query_events(&self, predicate: &dyn Fn(&Event) -> bool) -> gh_analytics::api::Result<Vec<Event>> {
        Ok(scan(&self.events, predicate))
    }

    fn query_repos(&self, predicate: &dyn Fn(&Repo) -> bool) -> gh_analytics::api::Result<Vec<Repo>> {
        Ok(scan(&self.repos, predicate))
    }
}

fn scan<T: Clone>(items: &[T], predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| predicate(*item)).cloned().collect()
}

fn open(dir: &Path, file: &str) -> Result<File> {
    let path = dir.join(file);
    File::open(&path).map_err(|source| Error::Open {
        file: path.display().to_string(),
        source,
    })
}
