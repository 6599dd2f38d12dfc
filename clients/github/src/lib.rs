mod builder;
mod payload;

use async_trait::async_trait;
use commit_export::api::{AuthorIdentity, Comment, Commit, Follower, Result};
use log::debug;
use reqwest::Client;
use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

pub use builder::GithubClientBuilder;

/// GitHub REST API client. Every endpoint is requested as given, a single page each.
pub struct GithubClient {
    client: Client,
}

impl GithubClient {
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let url = Url::parse(url).map_err(|err| anyhow::anyhow!("Invalid URL {}: {}", url, err))?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(read_response::<T>(response).await?)
    }
}

pub(crate) async fn read_response<T: DeserializeOwned>(response: Response) -> reqwest::Result<T> {
    response.error_for_status()?.json::<T>().await
}

#[async_trait]
impl commit_export::api::Client for GithubClient {
    async fn commits(&self, commits_url: &str) -> Result<Vec<Commit>> {
        let commits = self.get::<Vec<payload::Commit>>(commits_url).await?;
        Ok(commits.into_iter().map(Commit::from).collect())
    }

    async fn followers(&self, author: &AuthorIdentity) -> Result<Vec<Follower>> {
        let followers = self.get::<Vec<payload::Follower>>(&author.followers_url).await?;
        Ok(followers.into_iter().map(Follower::from).collect())
    }

    async fn comments(&self, commit: &Commit) -> Result<Vec<Comment>> {
        let comments = self.get::<Vec<payload::Comment>>(&commit.comments_url).await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}
