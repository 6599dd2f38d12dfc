mod args;

use commit_export::api::Result;
use commit_export::{CommitExporter, CsvReportWriter, ExportConfig, ExportSummary};
use github_client::GithubClientBuilder;

pub use args::Args;

pub async fn export_commits(config: ExportConfig) -> Result<ExportSummary> {
    let client = GithubClientBuilder::default()
        .try_with_user_agent(&config.user_agent)?
        .build()?;

    let exporter = CommitExporter::new(client, CsvReportWriter, config);
    exporter.export().await
}
