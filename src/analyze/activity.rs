use super::utils::{count_unique_repos, get_last_n_months, points, ratio, tiered};
use crate::types::scoring::{Breakdown, Label, MetricResult, Score};
use crate::types::timeline::YearData;
use serde::Serialize;

pub type ActivityResult = MetricResult<ActivityLevel, ActivityBreakdown, ActivityDetails>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl Label for ActivityLevel {
    fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBreakdown {
    pub recent_commits: Score,
    pub consistency: Score,
    pub diversity: Score,
}

impl Breakdown for ActivityBreakdown {
    fn components(&self) -> Vec<(&'static str, Score)> {
        vec![
            ("recentCommits", self.recent_commits),
            ("consistency", self.consistency),
            ("diversity", self.diversity),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
    pub recent_commits: u64,
    pub active_years: usize,
    pub window_years: usize,
    pub unique_repos: usize,
}

const RECENT_COMMITS_TARGET: f64 = 200.0;

const LEVELS: [(Score, ActivityLevel); 2] =
    [(71, ActivityLevel::High), (41, ActivityLevel::Moderate)];

// Spreading over 16+ repos scores below the 8..=15 optimum.
const DIVERSITY_TIERS: [(usize, Score); 4] = [(16, 25), (8, 30), (4, 20), (1, 10)];

pub fn activity_label(score: Score) -> ActivityLevel {
    tiered(score, &LEVELS, ActivityLevel::Low)
}

pub fn calculate_activity(timeline: &[YearData]) -> ActivityResult {
    if timeline.is_empty() {
        return MetricResult {
            score: 0,
            level: ActivityLevel::Low,
            breakdown: ActivityBreakdown::default(),
            details: ActivityDetails::default(),
        };
    }

    let recent = get_last_n_months(timeline, 3);
    let recent_commits: u64 = recent.iter().map(|year| year.total_commits).sum();
    let recent_points = points(
        recent_commits as f64 / RECENT_COMMITS_TARGET * 40.0,
        0.0,
        40.0,
    );

    let window = get_last_n_months(timeline, 12);
    let active_years = window.iter().filter(|year| year.is_active()).count();
    let consistency_points = points(
        ratio(active_years as f64, window.len().max(1) as f64) * 30.0,
        0.0,
        30.0,
    );

    let unique_repos = count_unique_repos(recent.iter().copied());
    let diversity_points = tiered(unique_repos, &DIVERSITY_TIERS, 0);

    let result = MetricResult::from_breakdown(
        ActivityBreakdown {
            recent_commits: recent_points,
            consistency: consistency_points,
            diversity: diversity_points,
        },
        ActivityDetails {
            recent_commits,
            active_years,
            window_years: window.len(),
            unique_repos,
        },
        (0, 100),
        activity_label,
    );
    tracing::debug!(score = result.score, level = result.level.as_str(), "activity scored");
    result
}
