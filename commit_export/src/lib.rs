//! Commit history export
//!
//! # Overview
//!
//! Library exporting the commit history of a single GitHub repository into three CSV reports.
//! The commit list is fetched once, then three independent passes run over it:
//!
//! * authors - one row per commit mapped to a platform account, carrying account and commit author details,
//! * followers - one row per distinct author (by account id, in order of first appearance) with up to five follower usernames,
//! * commits - one row per commit with the repository URL and the URLs of its two most recent comments.
//!
//! A failed follower request only drops that author from the followers report.
//! A failed commit list or comment request aborts the export; reports already written stay on disk.

pub mod api;
#[cfg(feature = "exporter")]
pub mod exporter;
#[cfg(feature = "exporter")]
pub mod report;

#[cfg(feature = "exporter")]
pub use exporter::{CommitExporter, ExportConfig, ExportSummary};
#[cfg(feature = "exporter")]
pub use report::{CsvReportWriter, ReportPaths, ReportWriter};
