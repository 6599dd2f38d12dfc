use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub author: Option<Account>,
    pub commit: CommitDetails,
    pub comments_url: String,
    pub html_url: String,
}

#[derive(Deserialize, Debug)]
pub struct CommitDetails {
    pub author: CommitAuthor,
}

#[derive(Deserialize, Debug)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, Debug)]
pub struct Account {
    pub id: u64,
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
    pub followers_url: String,
}

impl From<Commit> for commit_export::api::Commit {
    fn from(commit: Commit) -> Self {
        commit_export::api::Commit {
            sha: commit.sha,
            author: commit.author.map(Into::into),
            author_name: commit.commit.author.name,
            author_email: commit.commit.author.email,
            comments_url: commit.comments_url,
            html_url: commit.html_url,
        }
    }
}

impl From<Account> for commit_export::api::AuthorIdentity {
    fn from(account: Account) -> Self {
        commit_export::api::AuthorIdentity {
            id: account.id,
            login: account.login,
            html_url: account.html_url,
            avatar_url: account.avatar_url,
            followers_url: account.followers_url,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Follower {
    pub login: String,
}

impl From<Follower> for commit_export::api::Follower {
    fn from(follower: Follower) -> Self {
        commit_export::api::Follower { login: follower.login }
    }
}

#[derive(Deserialize, Debug)]
pub struct Comment {
    pub html_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for commit_export::api::Comment {
    fn from(comment: Comment) -> Self {
        commit_export::api::Comment {
            html_url: comment.html_url,
            created_at: comment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_without_account() {
        let body = r#"{
            "sha": "a1",
            "author": null,
            "commit": { "author": { "name": "N1", "email": "e1", "date": "2011-04-14T16:00:49Z" } },
            "comments_url": "https://api.github.com/repos/o/r/commits/a1/comments",
            "html_url": "https://github.com/o/r/commit/a1"
        }"#;
        let commit: commit_export::api::Commit = serde_json::from_str::<Commit>(body).unwrap().into();
        assert_eq!(commit.author, None);
        assert_eq!(commit.author_name, "N1");
        assert_eq!(commit.author_email, "e1");
    }

    #[test]
    fn commit_missing_author_field() {
        let body = r#"{
            "sha": "a1",
            "commit": { "author": { "name": "N1", "email": "e1" } },
            "comments_url": "/a1/comments",
            "html_url": "https://github.com/o/r/commit/a1"
        }"#;
        let commit = serde_json::from_str::<Commit>(body).unwrap();
        assert!(commit.author.is_none());
    }

    #[test]
    fn comment_created_at() {
        let body = r#"{ "html_url": "https://github.com/o/r/commit/a1#commitcomment-1", "created_at": "2011-04-14T16:00:49Z" }"#;
        let comment = serde_json::from_str::<Comment>(body).unwrap();
        assert_eq!(comment.created_at.timestamp(), 1302796849);
    }
}
