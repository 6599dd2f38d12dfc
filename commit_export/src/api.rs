use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_more::Constructor;
use strum_macros::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[cfg(feature = "exporter")]
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed {stage}: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn at(self, stage: Stage) -> Error {
        Error::Stage {
            stage,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Step of the export run, used to name the failing step in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stage {
    #[strum(serialize = "fetching commits")]
    FetchCommits,
    #[strum(serialize = "writing authors report")]
    Authors,
    #[strum(serialize = "writing followers report")]
    Followers,
    #[strum(serialize = "fetching commit comments")]
    Comments,
    #[strum(serialize = "writing commits report")]
    Commits,
}

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Commit {
    pub sha: String,
    /// Platform account, `None` when the commit could not be mapped to one.
    pub author: Option<AuthorIdentity>,
    pub author_name: String,
    pub author_email: String,
    pub comments_url: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct AuthorIdentity {
    pub id: u64,
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
    pub followers_url: String,
}

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Follower {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Comment {
    pub html_url: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait Client: Send + Sync {
    async fn commits(&self, commits_url: &str) -> Result<Vec<Commit>>;

    async fn followers(&self, author: &AuthorIdentity) -> Result<Vec<Follower>>;

    async fn comments(&self, commit: &Commit) -> Result<Vec<Comment>>;
}
