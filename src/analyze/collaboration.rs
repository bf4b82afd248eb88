use super::utils::{get_unique_repos, points, ratio, tiered};
use crate::types::scoring::{Breakdown, Label, MetricResult, Score};
use crate::types::timeline::YearData;
use serde::Serialize;
use std::collections::BTreeSet;

pub type CollaborationResult =
    MetricResult<CollaborationLevel, CollaborationBreakdown, CollaborationDetails>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CollaborationLevel {
    Low,
    Moderate,
    High,
    Excellent,
}

impl Label for CollaborationLevel {
    fn as_str(&self) -> &'static str {
        match self {
            CollaborationLevel::Low => "Low",
            CollaborationLevel::Moderate => "Moderate",
            CollaborationLevel::High => "High",
            CollaborationLevel::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationBreakdown {
    pub contribution_ratio: Score,
    pub diversity: Score,
    pub engagement: Score,
}

impl Breakdown for CollaborationBreakdown {
    fn components(&self) -> Vec<(&'static str, Score)> {
        vec![
            ("contributionRatio", self.contribution_ratio),
            ("diversity", self.diversity),
            ("engagement", self.engagement),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationDetails {
    pub owned_repos: usize,
    pub contributed_repos: usize,
    pub contribution_percentage: f64,
    pub contribution_commits: u64,
    pub average_commits_per_repo: f64,
    pub organizations: Vec<String>,
}

const LEVELS: [(Score, CollaborationLevel); 3] = [
    (81, CollaborationLevel::Excellent),
    (61, CollaborationLevel::High),
    (41, CollaborationLevel::Moderate),
];

const DIVERSITY_TARGET: f64 = 10.0;
const ENGAGEMENT_TARGET: f64 = 5.0;

pub fn collaboration_label(score: Score) -> CollaborationLevel {
    tiered(score, &LEVELS, CollaborationLevel::Low)
}

pub fn calculate_collaboration(timeline: &[YearData]) -> CollaborationResult {
    let owned = get_unique_repos(timeline.iter().flat_map(|year| year.owned_repos.iter()));
    let contributed = get_unique_repos(timeline.iter().flat_map(|year| year.contributions.iter()));
    let organizations: BTreeSet<&str> = contributed
        .iter()
        .filter_map(|repo| repo.repository.organization())
        .collect();

    let owned_repos = owned.len();
    let contributed_repos = contributed.len();
    let contributed_count = contributed_repos as f64;

    let contribution_percentage =
        ratio(contributed_count, (owned_repos + contributed_repos) as f64) * 100.0;
    let contribution_commits: u64 = timeline
        .iter()
        .flat_map(|year| year.contributions.iter())
        .map(|repo| repo.commits())
        .sum();
    let average_commits_per_repo = ratio(contribution_commits as f64, contributed_count);

    let breakdown = CollaborationBreakdown {
        contribution_ratio: points(contribution_percentage, 0.0, 50.0),
        diversity: points(contributed_count / DIVERSITY_TARGET * 30.0, 0.0, 30.0),
        engagement: points(
            average_commits_per_repo / ENGAGEMENT_TARGET * 20.0,
            0.0,
            20.0,
        ),
    };

    let result = MetricResult::from_breakdown(
        breakdown,
        CollaborationDetails {
            owned_repos,
            contributed_repos,
            contribution_percentage,
            contribution_commits,
            average_commits_per_repo,
            organizations: organizations.into_iter().map(str::to_string).collect(),
        },
        (0, 100),
        collaboration_label,
    );
    tracing::debug!(score = result.score, level = result.level.as_str(), "collaboration scored");
    result
}
