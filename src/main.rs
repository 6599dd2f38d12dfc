use clap::Parser;
use commit_export_app::Args;
use log::{error, info};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match commit_export_app::export_commits(args.into()).await {
        Ok(summary) => info!(
            "Exported {} commits: {} author rows, {} follower rows, {} commit rows",
            summary.commits, summary.authors, summary.followers, summary.commit_comments
        ),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
