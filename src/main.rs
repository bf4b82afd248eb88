mod cli;

use chrono::{DateTime, Utc};
use clap::Parser;
use gitscore::analyze::check::check_findings;
use gitscore::config::load_config;
use gitscore::report::{self, OutputFormat};
use gitscore::types::config::{parse_clock, ScoringConfig};
use gitscore::types::scoring::MetricKey;
use gitscore::types::timeline::{load_timeline, ProfileInput};
use gitscore::{analyze, ScoreError};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reads the timeline and the configuration layered around it.
fn load_inputs(path: &Path) -> Result<(ProfileInput, ScoringConfig), ScoreError> {
    let input = load_timeline(path)?;
    let root = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = load_config(root)?;
    Ok((input, config))
}

/// `--now` wins over `[clock] now`, which wins over the system clock.
fn resolve_now(flag: Option<&str>, config: &ScoringConfig) -> Result<DateTime<Utc>, ScoreError> {
    if let Some(value) = flag {
        return parse_clock(value);
    }
    Ok(config.pinned_now()?.unwrap_or_else(Utc::now))
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: &ScoringConfig,
) -> Result<OutputFormat, ScoreError> {
    match flag {
        Some(cli::ReportFormat::Json) => Ok(OutputFormat::Json),
        Some(cli::ReportFormat::Md) => Ok(OutputFormat::Md),
        None => config
            .report_format()
            .map(OutputFormat::parse)
            .unwrap_or(Ok(OutputFormat::Md)),
    }
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let (input, config) = load_inputs(&cmd.path)?;
            let now = resolve_now(cmd.now.as_deref(), &config)?;
            let format = resolve_format(cmd.format, &config)?;
            let profile_report = analyze(&input, now);

            let rendered = match cmd.metric.as_deref() {
                Some(name) => {
                    let key = MetricKey::parse(name)
                        .ok_or_else(|| ScoreError::UnknownMetric(name.to_string()))?;
                    report::render_metric(&profile_report.metrics.metric_data(key), format)?
                }
                None => report::render(&profile_report, format, config.include_categories())?,
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Categories(cmd) => {
            let (input, config) = load_inputs(&cmd.path)?;
            let now = resolve_now(cmd.now.as_deref(), &config)?;
            let format = resolve_format(cmd.format, &config)?;
            let profile_report = analyze(&input, now);
            println!(
                "{}",
                report::render_categories(&profile_report.categories, format)?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let (input, config) = load_inputs(&cmd.path)?;
            let now = resolve_now(cmd.now.as_deref(), &config)?;
            let findings = check_findings(&input.timeline, now, &config.check_settings());

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
