use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gh_analytics::api::{Dimension, EventType, SortCriterion};
use gh_analytics::RankingConfig;

use crate::report::Query;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding actors.csv, commits.csv, events.csv and repos.csv
    #[clap(short, long, env = "GH_ANALYTICS_DATA_DIR", default_value = "data", parse(from_os_str))]
    pub data_dir: PathBuf,

    /// Maximal number of entries per ranking
    #[clap(short, long, env = "GH_ANALYTICS_LIMIT", default_value_t = 10)]
    pub limit: usize,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Users sorted by amount of commits pushed and PRs created
    TopUsers,
    /// Repositories sorted by amount of commits pushed
    TopReposByCommits,
    /// Repositories sorted by amount of watch events
    TopReposByWatchEvents,
    /// All predefined rankings
    All,
    /// Ranking by custom criteria
    Rank {
        /// Ranked entities: users or repos
        dimension: Dimension,

        /// Sort criteria: commitsPushed, prCreated, watchActivity
        #[clap(
            name = "sort",
            short,
            long,
            use_value_delimiter = true,
            required_unless_present = "event-types"
        )]
        sort: Vec<SortCriterion>,

        /// Event types counted on top of sort criteria, e.g. ForkEvent
        #[clap(name = "event-types", short, long = "event-type", use_value_delimiter = true)]
        event_types: Vec<EventType>,
    },
}

impl Command {
    /// Ranking queries the command runs, in output order.
    pub fn queries(&self, limit: usize) -> Vec<Query> {
        match self {
            Command::TopUsers => vec![top_users(limit)],
            Command::TopReposByCommits => vec![top_repos_by_commits(limit)],
            Command::TopReposByWatchEvents => vec![top_repos_by_watch_events(limit)],
            Command::All => vec![
                top_users(limit),
                top_repos_by_commits(limit),
                top_repos_by_watch_events(limit),
            ],
            Command::Rank {
                dimension,
                sort,
                event_types,
            } => vec![Query::new(
                *dimension,
                RankingConfig::new(sort.clone(), event_types.clone(), limit),
            )],
        }
    }
}

fn top_users(limit: usize) -> Query {
    let criteria = vec![SortCriterion::CommitsPushed, SortCriterion::PrCreated];
    Query::new(Dimension::Actor, RankingConfig::by_criteria(criteria, limit))
}

fn top_repos_by_commits(limit: usize) -> Query {
    let criteria = vec![SortCriterion::CommitsPushed];
    Query::new(Dimension::Repo, RankingConfig::by_criteria(criteria, limit))
}

fn top_repos_by_watch_events(limit: usize) -> Query {
    let criteria = vec![SortCriterion::WatchActivity];
    Query::new(Dimension::Repo, RankingConfig::by_criteria(criteria, limit))
}

#[test]
fn parse_rank_test() {
    let args = Args::parse_from([
        "gh_analytics",
        "--limit",
        "3",
        "rank",
        "repos",
        "--sort",
        "commitsPushed,prCreated",
        "--event-type",
        "ForkEvent",
    ]);
    assert_eq!(args.limit, 3);
    assert_eq!(
        args.command,
        Command::Rank {
            dimension: Dimension::Repo,
            sort: vec![SortCriterion::CommitsPushed, SortCriterion::PrCreated],
            event_types: vec![EventType::ForkEvent],
        }
    );
}

#[test]
fn parse_defaults_test() {
    let args = Args::parse_from(["gh_analytics", "top-users"]);
    assert_eq!(args.limit, 10);
    assert_eq!(args.data_dir, PathBuf::from("data"));
    assert_eq!(args.command, Command::TopUsers);
}

#[test]
fn parse_invalid_dimension_test() {
    assert!(Args::try_parse_from(["gh_analytics", "rank", "commits"]).is_err());
}

#[test]
fn parse_rank_requires_basis_test() {
    assert!(Args::try_parse_from(["gh_analytics", "rank", "users"]).is_err());

    let args = Args::try_parse_from(["gh_analytics", "rank", "users", "--event-type", "WatchEvent"]).unwrap();
    let queries = args.command.queries(args.limit);
    assert_eq!(queries[0].config.qualifying_event_types().len(), 1);
    assert_eq!(queries[0].title(), "Top 10 users by WatchEvents");

    let args = Args::try_parse_from(["gh_analytics", "rank", "users", "-s", "prCreated"]).unwrap();
    assert_eq!(args.command.queries(args.limit)[0].title(), "Top 10 users by PRs created");
}

#[test]
fn all_queries_test() {
    let queries = Command::All.queries(5);
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[0].dimension, Dimension::Actor);
    assert_eq!(
        queries[2].config,
        RankingConfig::by_criteria(vec![SortCriterion::WatchActivity], 5)
    );
}
