use crate::api::{AuthorIdentity, Client, Comment, Commit, Result, Stage};
use crate::report::{AuthorRow, CommitCommentRow, FollowerRow, ReportPaths, ReportWriter};
use futures::{stream, StreamExt, TryStreamExt};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// Number of follower usernames kept per author.
pub const MAX_FOLLOWERS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Commit listing endpoint of the exported repository.
    pub commits_url: String,
    /// Value of the `User-Agent` header sent with every request.
    pub user_agent: String,
    pub reports: ReportPaths,
    /// Maximal number of follower or comment requests in flight. `1` keeps the run sequential.
    pub max_requests: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            commits_url: "https://api.github.com/repositories/19438/commits".to_string(),
            user_agent: "ClubL_Tech_Test".to_string(),
            reports: ReportPaths::default(),
            max_requests: 1,
        }
    }
}

/// Number of rows written to each report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub commits: usize,
    pub authors: usize,
    pub followers: usize,
    pub commit_comments: usize,
}

pub struct CommitExporter<CLIENT, WRITER>
where
    CLIENT: Client,
    WRITER: ReportWriter,
{
    client: Arc<CLIENT>,
    writer: WRITER,
    config: ExportConfig,
}

impl<CLIENT, WRITER> CommitExporter<CLIENT, WRITER>
where
    CLIENT: Client,
    WRITER: ReportWriter,
{
    pub fn new(client: CLIENT, writer: WRITER, config: ExportConfig) -> Self {
        CommitExporter {
            client: Arc::new(client),
            writer,
            config,
        }
    }

    /// Fetches the commit list once, then writes the authors, followers and commits reports in that order.
    /// Reports written before a failure are left on disk.
    pub async fn export(&self) -> Result<ExportSummary> {
        let commits = self
            .client
            .commits(&self.config.commits_url)
            .await
            .map_err(|err| err.at(Stage::FetchCommits))?;
        info!("Fetched {} commits", commits.len());

        let authors = author_rows(&commits);
        self.writer
            .write_report(&self.config.reports.authors, &authors)
            .map_err(|err| err.at(Stage::Authors))?;

        let followers = self.follower_rows(&commits).await;
        self.writer
            .write_report(&self.config.reports.followers, &followers)
            .map_err(|err| err.at(Stage::Followers))?;

        let commit_comments = self
            .commit_comment_rows(&commits)
            .await
            .map_err(|err| err.at(Stage::Comments))?;
        self.writer
            .write_report(&self.config.reports.commits, &commit_comments)
            .map_err(|err| err.at(Stage::Commits))?;

        Ok(ExportSummary {
            commits: commits.len(),
            authors: authors.len(),
            followers: followers.len(),
            commit_comments: commit_comments.len(),
        })
    }

    /// One row per distinct author, in order of first appearance. Authors whose followers
    /// cannot be fetched are left out.
    pub async fn follower_rows(&self, commits: &[Commit]) -> Vec<FollowerRow> {
        stream::iter(distinct_authors(commits))
            .map(|author| async move {
                debug!("Fetching followers of {}", author.login);
                match self.client.followers(author).await {
                    Ok(followers) => Some(follower_row(author, followers.into_iter().map(|f| f.login))),
                    Err(err) => {
                        warn!("Could not fetch followers for {}: {}", author.login, err);
                        None
                    }
                }
            })
            .buffered(self.max_requests())
            .filter_map(|row| async move { row })
            .collect()
            .await
    }

    /// One row per commit, in commit order. Fails on the first commit whose comments cannot be fetched.
    pub async fn commit_comment_rows(&self, commits: &[Commit]) -> Result<Vec<CommitCommentRow>> {
        stream::iter(commits)
            .map(|commit| async move {
                debug!("Fetching comments of {}", commit.sha);
                match self.client.comments(commit).await {
                    Ok(comments) => Ok(commit_comment_row(commit, comments)),
                    Err(err) => {
                        error!("Could not fetch comments for {}: {}", commit.sha, err);
                        Err(err)
                    }
                }
            })
            .buffered(self.max_requests())
            .try_collect()
            .await
    }

    fn max_requests(&self) -> usize {
        self.config.max_requests.max(1)
    }
}

/// Rows for commits mapped to a platform account, in commit order.
pub fn author_rows(commits: &[Commit]) -> Vec<AuthorRow> {
    commits
        .iter()
        .filter_map(|commit| {
            let author = commit.author.as_ref()?;
            Some(AuthorRow {
                commit_id: commit.sha.clone(),
                author_id: author.id,
                author_username: author.login.clone(),
                author_name: commit.author_name.clone(),
                author_email: commit.author_email.clone(),
                author_account_url: author.html_url.clone(),
                author_avatar_url: author.avatar_url.clone(),
            })
        })
        .collect()
}

/// Authors deduplicated by account id, in order of first appearance.
fn distinct_authors(commits: &[Commit]) -> Vec<&AuthorIdentity> {
    let mut seen = HashSet::new();
    commits
        .iter()
        .filter_map(|commit| commit.author.as_ref())
        .filter(|author| seen.insert(author.id))
        .collect()
}

fn follower_row(author: &AuthorIdentity, followers: impl IntoIterator<Item = String>) -> FollowerRow {
    let mut logins = followers.into_iter().take(MAX_FOLLOWERS);
    FollowerRow {
        committer_username: author.login.clone(),
        follower1_username: logins.next(),
        follower2_username: logins.next(),
        follower3_username: logins.next(),
        follower4_username: logins.next(),
        follower5_username: logins.next(),
    }
}

fn commit_comment_row(commit: &Commit, mut comments: Vec<Comment>) -> CommitCommentRow {
    // stable, equal timestamps keep API order
    comments.sort_by_key(|comment| comment.created_at);
    let mut latest = comments.into_iter().rev().map(|comment| comment.html_url);
    CommitCommentRow {
        repo_url: repo_url(&commit.html_url).to_string(),
        last_comment_url: latest.next(),
        second_last_comment_url: latest.next(),
    }
}

/// Strips the trailing `/commit/<sha>` segments from a commit page URL.
pub fn repo_url(commit_html_url: &str) -> &str {
    commit_html_url.rsplitn(3, '/').nth(2).unwrap_or("")
}
