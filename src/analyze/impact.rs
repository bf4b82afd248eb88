use super::utils::{calculate_total_forks, calculate_total_stars, points, round_half_up, tiered};
use crate::types::scoring::{Breakdown, Label, MetricResult, Score};
use crate::types::timeline::YearData;
use serde::Serialize;

pub type ImpactResult = MetricResult<ImpactLevel, ImpactBreakdown, ImpactDetails>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ImpactLevel {
    Minimal,
    Low,
    Moderate,
    Strong,
    Exceptional,
}

impl Label for ImpactLevel {
    fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Minimal => "Minimal",
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::Strong => "Strong",
            ImpactLevel::Exceptional => "Exceptional",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactBreakdown {
    pub stars: Score,
    pub forks: Score,
    pub contributors: Score,
    pub reach: Score,
    pub engagement: Score,
}

impl Breakdown for ImpactBreakdown {
    fn components(&self) -> Vec<(&'static str, Score)> {
        vec![
            ("stars", self.stars),
            ("forks", self.forks),
            ("contributors", self.contributors),
            ("reach", self.reach),
            ("engagement", self.engagement),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDetails {
    pub total_stars: u64,
    pub total_forks: u64,
    pub estimated_contributors: u64,
    pub total_prs: u64,
    pub total_issues: u64,
}

const LEVELS: [(Score, ImpactLevel); 4] = [
    (81, ImpactLevel::Exceptional),
    (61, ImpactLevel::Strong),
    (41, ImpactLevel::Moderate),
    (21, ImpactLevel::Low),
];

const STAR_TIERS: [(u64, Score); 7] = [
    (10_000, 35),
    (5_000, 30),
    (1_000, 25),
    (500, 20),
    (100, 15),
    (50, 10),
    (10, 5),
];

const FORK_TIERS: [(u64, Score); 5] = [(1_000, 20), (500, 16), (100, 12), (50, 8), (10, 4)];

pub fn impact_label(score: Score) -> ImpactLevel {
    tiered(score, &LEVELS, ImpactLevel::Minimal)
}

pub fn star_points(total_stars: u64) -> Score {
    tiered(total_stars, &STAR_TIERS, 0)
}

pub fn fork_points(total_forks: u64) -> Score {
    tiered(total_forks, &FORK_TIERS, 0)
}

/// Reach across every year. The same repository listed in several years is
/// counted once per year.
pub fn calculate_impact(timeline: &[YearData]) -> ImpactResult {
    let total_stars: u64 = timeline.iter().map(calculate_total_stars).sum();
    let total_forks: u64 = timeline.iter().map(calculate_total_forks).sum();
    let total_prs: u64 = timeline.iter().map(|year| year.total_prs).sum();
    let total_issues: u64 = timeline.iter().map(|year| year.total_issues).sum();

    let stars = total_stars as f64;
    let forks = total_forks as f64;

    let breakdown = ImpactBreakdown {
        stars: star_points(total_stars),
        forks: fork_points(total_forks),
        contributors: points(forks / 100.0 * 15.0, 0.0, 15.0),
        reach: points((stars + forks) / 500.0 * 20.0, 0.0, 20.0),
        engagement: points((total_prs + total_issues) as f64 / 200.0 * 10.0, 0.0, 10.0),
    };

    let result = MetricResult::from_breakdown(
        breakdown,
        ImpactDetails {
            total_stars,
            total_forks,
            estimated_contributors: round_half_up(forks / 10.0).max(0) as u64,
            total_prs,
            total_issues,
        },
        (0, 100),
        impact_label,
    );
    tracing::debug!(score = result.score, level = result.level.as_str(), "impact scored");
    result
}
