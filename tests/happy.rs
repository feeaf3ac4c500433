use std::path::PathBuf;

use csv_store::CsvStore;
use gh_analytics::api::{Actor, Dimension, EventType, Repo, SortCriterion};
use gh_analytics::{Analytics, Ranked, RankingConfig};
use gh_analytics_app::{rank_activity, Args, Command, Report, Rows};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn args(limit: usize, command: Command) -> Args {
    Args {
        data_dir: data_dir(),
        limit,
        command,
    }
}

async fn reports(args: Args) -> Vec<Report> {
    let mut receiver = rank_activity(args).await.unwrap();
    let mut reports = Vec::new();
    while let Some(report) = receiver.recv().await {
        reports.push(report.unwrap());
    }
    reports
}

fn users(report: &Report) -> Vec<(u64, &str, usize)> {
    match &report.rows {
        Rows::Users(users) => users
            .iter()
            .map(|r| (r.entity.id, r.entity.username.as_str(), r.count))
            .collect(),
        rows => panic!("Expected users, got {:?}", rows),
    }
}

fn repos(report: &Report) -> Vec<(u64, &str, usize)> {
    match &report.rows {
        Rows::Repos(repos) => repos
            .iter()
            .map(|r| (r.entity.id, r.entity.name.as_str(), r.count))
            .collect(),
        rows => panic!("Expected repos, got {:?}", rows),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn top_users_test() {
    let reports = reports(args(10, Command::TopUsers)).await;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].title, "Top 10 users by commits pushed, PRs created");
    assert_eq!(
        users(&reports[0]),
        vec![
            (8517910, "LombiqBot", 4),
            (29139614, "renovate[bot]", 2),
            (44826218, "MatoPlus", 2),
            (625469, "armano2", 1),
            (1008205, "wigforss", 1),
            (2134633, "buddyspike", 1),
            (2631623, "onosendi", 1),
            (2895902, "patsonluk", 1),
            (5271692, "romankagan", 1),
            (5954907, "awesomekling", 1),
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn top_repos_by_commits_test() {
    let reports = reports(args(5, Command::TopReposByCommits)).await;
    assert_eq!(
        repos(&reports[0]),
        vec![
            (42018768, "Lombiq/Helpful-Libraries", 2),
            (62069489, "multicharts/scanner-check", 2),
            (204268723, "supershell2019/conf", 2),
            (231160326, "MatoPlus/react-jsx-lab-cb-gh-000", 2),
            (6495132, "wikimedia/mediawiki-extensions-CentralAuth", 1),
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn all_in_order_test() {
    let reports = reports(args(10, Command::All)).await;
    let titles: Vec<&str> = reports.iter().map(|report| report.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Top 10 users by commits pushed, PRs created",
            "Top 10 repositories by commits pushed",
            "Top 10 repositories by watch activity",
        ]
    );
    // Only 3 of 4 watched repositories are known, the ranking is clamped instead of failing.
    assert_eq!(
        repos(&reports[2]),
        vec![
            (31792824, "flutter/flutter", 1),
            (153830667, "KrzysztofSzewczyk/asmbf", 1),
            (221552739, "z0ph/aws-security-toolbox", 1),
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn custom_rank_test() {
    let command = Command::Rank {
        dimension: Dimension::Repo,
        sort: vec![SortCriterion::Unrecognized("starsGiven".to_string())],
        event_types: vec![EventType::ForkEvent, EventType::IssuesEvent],
    };
    let reports = reports(args(10, command)).await;
    assert_eq!(
        repos(&reports[0]),
        vec![(153640774, "thadiun/hello-world", 1), (207424413, "skrapkam/samchang", 1)]
    );
}

#[tokio::test]
async fn missing_data_dir_test() {
    let mut args = args(10, Command::TopUsers);
    args.data_dir = data_dir().join("missing");
    let err = rank_activity(args).await.unwrap_err();
    assert!(matches!(err.downcast_ref::<csv_store::Error>(), Some(csv_store::Error::Open { .. })));
}

#[test]
fn deterministic_csv_ranking_test() {
    let analytics = Analytics::new(CsvStore::open(data_dir()).unwrap());
    let config = RankingConfig::by_criteria(vec![SortCriterion::CommitsPushed, SortCriterion::PrCreated], 10);
    let first: Vec<Ranked<Actor>> = analytics.top_users(&config).unwrap();
    for _ in 0..5 {
        assert_eq!(analytics.top_users(&config).unwrap(), first);
    }

    let config = RankingConfig::by_criteria(vec![SortCriterion::CommitsPushed], 100);
    let repos: Vec<Ranked<Repo>> = analytics.top_repos(&config).unwrap();
    assert!(repos.windows(2).all(|pair| pair[0].count >= pair[1].count));
    assert!(repos.len() < 100);
}
