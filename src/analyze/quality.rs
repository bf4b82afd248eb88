use super::utils::{get_unique_repos, points, ratio, tiered};
use crate::types::scoring::{Breakdown, Label, MetricResult, Score};
use crate::types::timeline::{RepositoryContribution, YearData};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

pub type QualityResult = MetricResult<QualityLevel, QualityBreakdown, QualityDetails>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum QualityLevel {
    Weak,
    Fair,
    Good,
    Strong,
    Excellent,
}

impl Label for QualityLevel {
    fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Weak => "Weak",
            QualityLevel::Fair => "Fair",
            QualityLevel::Good => "Good",
            QualityLevel::Strong => "Strong",
            QualityLevel::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityBreakdown {
    pub originality: Score,
    pub documentation: Score,
    pub ownership: Score,
    pub maturity: Score,
    pub stack: Score,
}

impl Breakdown for QualityBreakdown {
    fn components(&self) -> Vec<(&'static str, Score)> {
        vec![
            ("originality", self.originality),
            ("documentation", self.documentation),
            ("ownership", self.ownership),
            ("maturity", self.maturity),
            ("stack", self.stack),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityDetails {
    pub total_owned: usize,
    pub total_contributed: usize,
    pub original_owned: usize,
    pub documented_owned: usize,
    pub average_age_years: f64,
    pub languages: Vec<String>,
}

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

const LEVELS: [(Score, QualityLevel); 4] = [
    (81, QualityLevel::Excellent),
    (61, QualityLevel::Strong),
    (41, QualityLevel::Good),
    (21, QualityLevel::Fair),
];

const MATURITY_TIERS: [(f64, Score); 4] = [(5.0, 15), (3.0, 12), (2.0, 9), (1.0, 6)];

const STACK_TIERS: [(usize, Score); 5] = [(10, 10), (7, 8), (5, 6), (3, 4), (1, 2)];

pub fn quality_label(score: Score) -> QualityLevel {
    tiered(score, &LEVELS, QualityLevel::Weak)
}

pub fn maturity_points(average_age_years: f64) -> Score {
    if average_age_years > 0.0 {
        tiered(average_age_years, &MATURITY_TIERS, 3)
    } else {
        0
    }
}

pub fn stack_points(language_count: usize) -> Score {
    tiered(language_count, &STACK_TIERS, 0)
}

/// Average age in years of repositories that report a creation time.
fn mean_age_years(repos: &[&RepositoryContribution], now: DateTime<Utc>) -> f64 {
    let ages: Vec<f64> = repos
        .iter()
        .filter_map(|repo| repo.repository.created_at)
        .map(|created_at| (now - created_at).num_seconds() as f64 / SECONDS_PER_YEAR)
        .collect();
    ratio(ages.iter().sum(), ages.len() as f64)
}

/// Scores the owned portfolio. `now` pins repository ages.
pub fn calculate_quality(timeline: &[YearData], now: DateTime<Utc>) -> QualityResult {
    let owned = get_unique_repos(timeline.iter().flat_map(|year| year.owned_repos.iter()));
    let contributed = get_unique_repos(timeline.iter().flat_map(|year| year.contributions.iter()));

    let total_owned = owned.len();
    let total_contributed = contributed.len();
    let original_owned = owned.iter().filter(|repo| !repo.repository.is_fork).count();
    let documented_owned = owned
        .iter()
        .filter(|repo| repo.repository.is_documented())
        .count();
    let average_age_years = mean_age_years(&owned, now);
    let languages: BTreeSet<&str> = owned
        .iter()
        .filter_map(|repo| repo.repository.language())
        .collect();

    let owned_count = total_owned as f64;
    let breakdown = QualityBreakdown {
        originality: points(ratio(original_owned as f64, owned_count) * 30.0, 0.0, 30.0),
        documentation: points(ratio(documented_owned as f64, owned_count) * 25.0, 0.0, 25.0),
        ownership: points(
            ratio(owned_count, (total_owned + total_contributed) as f64) * 20.0,
            0.0,
            20.0,
        ),
        maturity: maturity_points(average_age_years),
        stack: stack_points(languages.len()),
    };

    let result = MetricResult::from_breakdown(
        breakdown,
        QualityDetails {
            total_owned,
            total_contributed,
            original_owned,
            documented_owned,
            average_age_years,
            languages: languages.into_iter().map(str::to_string).collect(),
        },
        (0, 100),
        quality_label,
    );
    tracing::debug!(score = result.score, level = result.level.as_str(), "quality scored");
    result
}
