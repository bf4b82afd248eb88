use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gitscore",
    version,
    about = "GitHub profile contribution scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every metric and category for a timeline file
    Score(ScoreCommand),
    /// Print the OUTPUT, QUALITY and TRUST category scores
    Categories(CategoriesCommand),
    /// Validate a timeline file and report findings
    Check(CheckCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Timeline JSON file
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Pin the scoring clock (RFC 3339)
    #[arg(long)]
    pub now: Option<String>,
    /// Only print a single metric
    #[arg(long)]
    pub metric: Option<String>,
}

#[derive(Args)]
pub struct CategoriesCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub now: Option<String>,
}
