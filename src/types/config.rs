use crate::error::ScoreError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub clock: Option<ClockConfig>,
    pub report: Option<ReportConfig>,
    pub check: Option<CheckConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// RFC 3339 timestamp used in place of the system clock.
    pub now: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    #[serde(default = "default_include_categories")]
    pub include_categories: bool,
}

fn default_include_categories() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub max_year_gap: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSettings {
    pub max_year_gap: u32,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self { max_year_gap: 2 }
    }
}

pub const REPORT_FORMATS: [&str; 2] = ["json", "md"];

pub fn parse_clock(value: &str) -> Result<DateTime<Utc>, ScoreError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| ScoreError::InvalidClock(format!("{value}: {e}")))
}

impl ScoringConfig {
    pub fn pinned_now(&self) -> Result<Option<DateTime<Utc>>, ScoreError> {
        self.clock
            .as_ref()
            .and_then(|clock| clock.now.as_deref())
            .map(parse_clock)
            .transpose()
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn include_categories(&self) -> bool {
        self.report
            .as_ref()
            .map(|report| report.include_categories)
            .unwrap_or(true)
    }

    pub fn check_settings(&self) -> CheckSettings {
        let defaults = CheckSettings::default();
        match &self.check {
            Some(check) => CheckSettings {
                max_year_gap: check.max_year_gap.unwrap_or(defaults.max_year_gap),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(format) = self.report_format() {
            if !REPORT_FORMATS.contains(&format) {
                return Err(ScoreError::ConfigParse(format!(
                    "unsupported report.format: {format} (expected one of {})",
                    REPORT_FORMATS.join(", ")
                )));
            }
        }

        self.pinned_now()
            .map_err(|e| ScoreError::ConfigParse(format!("clock.now is invalid: {e}")))?;

        if let Some(max_year_gap) = self.check.as_ref().and_then(|check| check.max_year_gap) {
            if max_year_gap == 0 {
                return Err(ScoreError::ConfigParse(
                    "check.max_year_gap must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
