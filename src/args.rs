use clap::Parser;
use commit_export::{ExportConfig, ReportPaths};
use std::{
    fmt::{Debug, Display},
    path::PathBuf,
    str::FromStr,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Commit listing API URL of the exported repository
    #[clap(long, env = "COMMIT_EXPORT_COMMITS_URL", default_value = "https://api.github.com/repositories/19438/commits")]
    pub commits_url: String,

    /// User-Agent header sent with every request
    #[clap(long, env = "COMMIT_EXPORT_USER_AGENT", default_value = "ClubL_Tech_Test")]
    pub user_agent: String,

    /// Directory the CSV reports are written to
    #[clap(short, long, env = "COMMIT_EXPORT_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Maximal parallel follower and comment requests
    #[clap(long, env = "COMMIT_EXPORT_MAX_REQUESTS", default_value_t = 1, parse(try_from_str=max_requests_in_range))]
    pub max_requests: u32,
}

impl From<Args> for ExportConfig {
    fn from(args: Args) -> Self {
        ExportConfig {
            commits_url: args.commits_url,
            user_agent: args.user_agent,
            reports: ReportPaths::in_dir(args.output_dir),
            max_requests: args.max_requests as usize,
        }
    }
}

fn max_requests_in_range(value: &str) -> clap::Result<u32, String> {
    number_in_range(value, 1, u32::MAX, "max_requests".to_string())
}

fn number_in_range<T>(value: &str, min: T, max: T, name: String) -> clap::Result<T, String>
where
    T: FromStr + PartialOrd + Display,
    <T as FromStr>::Err: Display,
{
    value.parse::<T>().map_err(|err| format!("{}", err)).and_then(|value| {
        if value < min || value > max {
            return Err(format!("{} is not in range {} .. {}.", name, min, max));
        }
        Ok(value)
    })
}
