pub mod json;
pub mod md;

use crate::error::{Result, ScoreError};
use crate::types::report::ProfileReport;
use crate::types::scoring::{CategoryScore, MetricData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Md),
            other => Err(ScoreError::ConfigParse(format!(
                "unsupported report format: {other}"
            ))),
        }
    }
}

pub fn render(
    report: &ProfileReport,
    format: OutputFormat,
    include_categories: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report, include_categories).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, include_categories)),
    }
}

pub fn render_metric(metric: &MetricData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(metric).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::metric_section(metric)),
    }
}

pub fn render_categories(categories: &[CategoryScore], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(categories).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::category_section(categories)),
    }
}
