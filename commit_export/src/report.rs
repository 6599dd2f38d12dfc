use crate::api::Result;
use log::info;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Record of one CSV report. `COLUMNS` is the header row and must follow the
/// order in which the struct fields are serialized.
pub trait Row: Serialize {
    const COLUMNS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorRow {
    pub commit_id: String,
    pub author_id: u64,
    pub author_username: String,
    pub author_name: String,
    pub author_email: String,
    pub author_account_url: String,
    pub author_avatar_url: String,
}

impl Row for AuthorRow {
    const COLUMNS: &'static [&'static str] = &[
        "commit_id",
        "author_id",
        "author_username",
        "author_name",
        "author_email",
        "author_account_url",
        "author_avatar_url",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowerRow {
    pub committer_username: String,
    pub follower1_username: Option<String>,
    pub follower2_username: Option<String>,
    pub follower3_username: Option<String>,
    pub follower4_username: Option<String>,
    pub follower5_username: Option<String>,
}

impl Row for FollowerRow {
    const COLUMNS: &'static [&'static str] = &[
        "committer_username",
        "follower1_username",
        "follower2_username",
        "follower3_username",
        "follower4_username",
        "follower5_username",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitCommentRow {
    pub repo_url: String,
    pub last_comment_url: Option<String>,
    pub second_last_comment_url: Option<String>,
}

impl Row for CommitCommentRow {
    const COLUMNS: &'static [&'static str] = &["repo_url", "last_comment_url", "second_last_comment_url"];
}

pub trait ReportWriter: Send + Sync {
    fn write_report<R: Row>(&self, path: &Path, rows: &[R]) -> Result<()>;
}

/// Writes reports as CSV files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReportWriter;

impl ReportWriter for CsvReportWriter {
    fn write_report<R: Row>(&self, path: &Path, rows: &[R]) -> Result<()> {
        let name = file_name(path);
        info!("Writing {} CSV file", name);
        let file = std::fs::File::create(path)?;
        write_csv(file, rows)?;
        info!("{} written", name);
        Ok(())
    }
}

/// Serializes `rows` with a header row, even when there are no rows.
pub fn write_csv<W: io::Write, R: Row>(out: W, rows: &[R]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(R::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Output file locations of the three reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub authors: PathBuf,
    pub followers: PathBuf,
    pub commits: PathBuf,
}

impl ReportPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        ReportPaths {
            authors: dir.join("authors.csv"),
            followers: dir.join("followers.csv"),
            commits: dir.join("commits.csv"),
        }
    }
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
