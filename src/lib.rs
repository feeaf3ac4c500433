pub mod args;
pub mod report;

use std::sync::Arc;

use csv_store::CsvStore;
use futures::{stream, StreamExt};
use gh_analytics::Analytics;
use log::{error, info};
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

pub use args::{Args, Command};
pub use report::{Query, Report, Rows};

/// Loads the store from `args.data_dir` and runs every ranking of `args.command`.
///
/// Rankings run concurrently against the shared store, reports arrive in command order.
pub async fn rank_activity(args: Args) -> anyhow::Result<Receiver<anyhow::Result<Report>>> {
    let data_dir = args.data_dir.clone();
    let store = tokio::task::spawn_blocking(move || CsvStore::open(data_dir)).await??;
    let analytics = Arc::new(Analytics::new(store));

    let queries = args.command.queries(args.limit);
    info!("Running {} rankings", queries.len());
    let handles: Vec<JoinHandle<gh_analytics::api::Result<Report>>> = queries
        .into_iter()
        .map(|query| {
            let analytics = analytics.clone();
            tokio::task::spawn_blocking(move || query.run(analytics.as_ref()))
        })
        .collect();

    let (sender, receiver) = tokio::sync::mpsc::channel::<anyhow::Result<Report>>(handles.len().max(1));
    tokio::spawn(async move {
        stream::iter(handles)
            .for_each(|handle| {
                let sender = sender.clone();
                async move {
                    if let Err(err) = sender.send(await_report(handle).await).await {
                        error!("Failed to deliver report: {}", err);
                    }
                }
            })
            .await;
    });
    Ok(receiver)
}

async fn await_report(handle: JoinHandle<gh_analytics::api::Result<Report>>) -> anyhow::Result<Report> {
    Ok(handle.await??)
}
