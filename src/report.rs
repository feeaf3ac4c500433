use std::fmt::Display;

use derive_more::Constructor;
use gh_analytics::api::{Actor, Dimension, Repo, Result, Store};
use gh_analytics::{Analytics, Ranked, RankingConfig};

/// Single ranking to run against the store.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Query {
    pub dimension: Dimension,
    pub config: RankingConfig,
}

impl Query {
    pub fn run<STORE: Store>(&self, analytics: &Analytics<STORE>) -> Result<Report> {
        let rows = match self.dimension {
            Dimension::Actor => Rows::Users(analytics.top_users(&self.config)?),
            Dimension::Repo => Rows::Repos(analytics.top_repos(&self.config)?),
        };
        Ok(Report::new(self.title(), rows))
    }

    pub fn title(&self) -> String {
        let entities = match self.dimension {
            Dimension::Actor => "users",
            Dimension::Repo => "repositories",
        };
        let basis: Vec<String> = self
            .config
            .criteria
            .iter()
            .map(ToString::to_string)
            .chain(self.config.event_types.iter().map(|event_type| format!("{}s", event_type)))
            .collect();
        format!("Top {} {} by {}", self.config.limit, entities, basis.join(", "))
    }
}

#[derive(Debug, PartialEq)]
pub enum Rows {
    Users(Vec<Ranked<Actor>>),
    Repos(Vec<Ranked<Repo>>),
}

#[derive(Debug, PartialEq, Constructor)]
pub struct Report {
    pub title: String,
    pub rows: Rows,
}

impl Report {
    fn table(&self) -> (&'static str, Vec<[String; 3]>) {
        match &self.rows {
            Rows::Users(users) => (
                "Username",
                users
                    .iter()
                    .map(|r| [r.entity.id.to_string(), r.entity.username.clone(), r.count.to_string()])
                    .collect(),
            ),
            Rows::Repos(repos) => (
                "Name",
                repos
                    .iter()
                    .map(|r| [r.entity.id.to_string(), r.entity.name.clone(), r.count.to_string()])
                    .collect(),
            ),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        let (name_header, lines) = self.table();
        if lines.is_empty() {
            return writeln!(f, "(no activity)");
        }
        let id_width = column_width("ID", lines.iter().map(|line| &line[0]));
        let name_width = column_width(name_header, lines.iter().map(|line| &line[1]));
        writeln!(f, "{:<id_width$} | {:<name_width$} | Events", "ID", name_header)?;
        writeln!(f, "{}-+-{}-+-------", "-".repeat(id_width), "-".repeat(name_width))?;
        for [id, name, count] in &lines {
            writeln!(f, "{:<id_width$} | {:<name_width$} | {}", id, name, count)?;
        }
        Ok(())
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a String>) -> usize {
    cells.map(|cell| cell.chars().count()).fold(header.len(), std::cmp::max)
}

#[test]
fn title_test() {
    let query = Query::new(
        Dimension::Repo,
        RankingConfig::new(
            vec![gh_analytics::api::SortCriterion::CommitsPushed],
            vec![gh_analytics::api::EventType::ForkEvent],
            5,
        ),
    );
    assert_eq!(query.title(), "Top 5 repositories by commits pushed, ForkEvents");
}

#[test]
fn report_display_test() {
    let report = Report::new(
        "Top 2 users by commits pushed".to_string(),
        Rows::Users(vec![
            Ranked::new(Actor::new(8517910, "LombiqBot".to_string()), 4),
            Ranked::new(Actor::new(1, "a".to_string()), 2),
        ]),
    );
    let expected = "Top 2 users by commits pushed\n\
        ID      | Username  | Events\n\
        --------+-----------+-------\n\
        8517910 | LombiqBot | 4\n\
        1       | a         | 2\n";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn empty_report_display_test() {
    let report = Report::new("Top 10 repositories by watch activity".to_string(), Rows::Repos(Vec::new()));
    assert_eq!(report.to_string(), "Top 10 repositories by watch activity\n(no activity)\n");
}
