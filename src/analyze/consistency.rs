use super::utils::{points, ratio, tiered};
use crate::types::scoring::{Breakdown, Label, MetricResult, Score};
use crate::types::timeline::YearData;
use serde::Serialize;

pub type ConsistencyResult =
    MetricResult<ConsistencyLevel, ConsistencyBreakdown, ConsistencyDetails>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ConsistencyLevel {
    Low,
    Moderate,
    High,
    Excellent,
}

impl Label for ConsistencyLevel {
    fn as_str(&self) -> &'static str {
        match self {
            ConsistencyLevel::Low => "Low",
            ConsistencyLevel::Moderate => "Moderate",
            ConsistencyLevel::High => "High",
            ConsistencyLevel::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyBreakdown {
    pub regularity: Score,
    pub streak: Score,
    pub recency: Score,
}

impl Breakdown for ConsistencyBreakdown {
    fn components(&self) -> Vec<(&'static str, Score)> {
        vec![
            ("regularity", self.regularity),
            ("streak", self.streak),
            ("recency", self.recency),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyDetails {
    pub mean_commits: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
    pub longest_streak: usize,
    pub recent_active_years: usize,
}

const LEVELS: [(Score, ConsistencyLevel); 3] = [
    (81, ConsistencyLevel::Excellent),
    (61, ConsistencyLevel::High),
    (41, ConsistencyLevel::Moderate),
];

const STREAK_TARGET: f64 = 5.0;
const RECENT_YEARS: usize = 2;

pub fn consistency_label(score: Score) -> ConsistencyLevel {
    tiered(score, &LEVELS, ConsistencyLevel::Low)
}

/// Population mean and standard deviation.
fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    let count = values.len() as f64;
    let mean = ratio(values.iter().sum(), count);
    let variance = ratio(
        values.iter().map(|value| (value - mean).powi(2)).sum(),
        count,
    );
    (mean, variance.sqrt())
}

fn longest_active_streak(sorted: &[&YearData]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for year in sorted {
        if year.is_active() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

pub fn calculate_consistency(timeline: &[YearData]) -> ConsistencyResult {
    let mut sorted: Vec<&YearData> = timeline.iter().collect();
    sorted.sort_by_key(|year| year.year);

    let commits: Vec<f64> = sorted.iter().map(|year| year.total_commits as f64).collect();
    let (mean_commits, std_dev) = mean_and_std_dev(&commits);
    let coefficient_of_variation = ratio(std_dev, mean_commits);
    // Without any commits there is nothing regular to reward.
    let regularity = if mean_commits > 0.0 {
        points(50.0 - coefficient_of_variation * 25.0, 0.0, 50.0)
    } else {
        0
    };

    let longest_streak = longest_active_streak(&sorted);
    let streak = points(longest_streak as f64 / STREAK_TARGET * 30.0, 0.0, 30.0);

    let recent = &sorted[sorted.len().saturating_sub(RECENT_YEARS)..];
    let recent_active_years = recent.iter().filter(|year| year.is_active()).count();
    let recency = points(
        ratio(recent_active_years as f64, recent.len() as f64) * 20.0,
        0.0,
        20.0,
    );

    let result = MetricResult::from_breakdown(
        ConsistencyBreakdown {
            regularity,
            streak,
            recency,
        },
        ConsistencyDetails {
            mean_commits,
            std_dev,
            coefficient_of_variation,
            longest_streak,
            recent_active_years,
        },
        (0, 100),
        consistency_label,
    );
    tracing::debug!(score = result.score, level = result.level.as_str(), "consistency scored");
    result
}
