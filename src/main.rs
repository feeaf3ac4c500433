use clap::Parser;
use gh_analytics_app::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let mut reports = gh_analytics_app::rank_activity(args).await?;
    while let Some(report) = reports.recv().await {
        println!("{}", report?);
    }

    Ok(())
}
