use super::utils::{
    calculate_total_forks, calculate_total_stars, extract_languages, points, tiered,
};
use crate::types::scoring::{Breakdown, Label, MetricResult, Score};
use crate::types::timeline::YearData;
use serde::Serialize;

pub type GrowthResult = MetricResult<GrowthLevel, GrowthBreakdown, GrowthDetails>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum GrowthLevel {
    #[serde(rename = "Rapid Decline")]
    RapidDecline,
    Declining,
    Stable,
    Growing,
    #[serde(rename = "Rapid Growth")]
    RapidGrowth,
}

impl Label for GrowthLevel {
    fn as_str(&self) -> &'static str {
        match self {
            GrowthLevel::RapidDecline => "Rapid Decline",
            GrowthLevel::Declining => "Declining",
            GrowthLevel::Stable => "Stable",
            GrowthLevel::Growing => "Growing",
            GrowthLevel::RapidGrowth => "Rapid Growth",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthBreakdown {
    pub activity_growth: Score,
    pub impact_growth: Score,
    pub skills_growth: Score,
}

impl Breakdown for GrowthBreakdown {
    fn components(&self) -> Vec<(&'static str, Score)> {
        vec![
            ("activityGrowth", self.activity_growth),
            ("impactGrowth", self.impact_growth),
            ("skillsGrowth", self.skills_growth),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthDetails {
    pub current_year: i32,
    pub previous_year: i32,
    #[serde(rename = "commitsYoYChange")]
    pub commits_yoy_change: f64,
    #[serde(rename = "starsYoYChange")]
    pub stars_yoy_change: f64,
    #[serde(rename = "forksYoYChange")]
    pub forks_yoy_change: f64,
    pub new_languages: Vec<String>,
}

const ACTIVITY_WEIGHT: f64 = 40.0;
const IMPACT_WEIGHT: f64 = 30.0;
const SKILLS_WEIGHT: f64 = 30.0;

const LEVELS: [(Score, GrowthLevel); 4] = [
    (51, GrowthLevel::RapidGrowth),
    (21, GrowthLevel::Growing),
    (-20, GrowthLevel::Stable),
    (-50, GrowthLevel::Declining),
];

const SKILLS_TIERS: [(usize, f64); 3] = [(5, 1.0), (3, 0.6), (1, 0.3)];

pub fn growth_label(score: Score) -> GrowthLevel {
    tiered(score, &LEVELS, GrowthLevel::RapidDecline)
}

/// Year-over-year change in percent. Growth from zero counts as 100%.
pub fn percentage_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Maps a percentage change onto `[-1, 1]`; +200% and -100% saturate.
pub fn normalize_change(change: f64) -> f64 {
    if change >= 200.0 {
        1.0
    } else if change <= -100.0 {
        -1.0
    } else if change >= 0.0 {
        change / 200.0
    } else {
        change / 100.0
    }
}

fn empty_result() -> GrowthResult {
    MetricResult {
        score: 0,
        level: GrowthLevel::Stable,
        breakdown: GrowthBreakdown::default(),
        details: GrowthDetails::default(),
    }
}

/// Compares `timeline[0]` (current year) against `timeline[1]` (previous year).
/// The caller supplies the order.
pub fn calculate_growth(timeline: &[YearData]) -> GrowthResult {
    let (current, previous) = match timeline {
        [current, previous, ..] => (current, previous),
        _ => return empty_result(),
    };
    if current.year < previous.year {
        tracing::warn!(
            current = current.year,
            previous = previous.year,
            "growth timeline is not ordered most recent first"
        );
    }

    let commits_change =
        percentage_change(previous.total_commits as f64, current.total_commits as f64);
    let stars_change = percentage_change(
        calculate_total_stars(previous) as f64,
        calculate_total_stars(current) as f64,
    );
    let forks_change = percentage_change(
        calculate_total_forks(previous) as f64,
        calculate_total_forks(current) as f64,
    );

    let previous_languages = extract_languages(previous);
    let new_languages: Vec<String> = extract_languages(current)
        .into_iter()
        .filter(|language| !previous_languages.contains(language))
        .map(str::to_string)
        .collect();
    let skills_fraction = tiered(new_languages.len(), &SKILLS_TIERS, 0.0);

    let breakdown = GrowthBreakdown {
        activity_growth: points(
            normalize_change(commits_change) * ACTIVITY_WEIGHT,
            -ACTIVITY_WEIGHT,
            ACTIVITY_WEIGHT,
        ),
        impact_growth: points(
            normalize_change((stars_change + forks_change) / 2.0) * IMPACT_WEIGHT,
            -IMPACT_WEIGHT,
            IMPACT_WEIGHT,
        ),
        skills_growth: points(skills_fraction * SKILLS_WEIGHT, 0.0, SKILLS_WEIGHT),
    };

    let result = MetricResult::from_breakdown(
        breakdown,
        GrowthDetails {
            current_year: current.year,
            previous_year: previous.year,
            commits_yoy_change: commits_change,
            stars_yoy_change: stars_change,
            forks_yoy_change: forks_change,
            new_languages,
        },
        (-100, 100),
        growth_label,
    );
    tracing::debug!(score = result.score, level = result.level.as_str(), "growth scored");
    result
}
