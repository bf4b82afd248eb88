pub mod activity;
pub mod categories;
pub mod check;
pub mod collaboration;
pub mod consistency;
pub mod growth;
pub mod impact;
pub mod quality;
pub mod utils;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::types::report::ProfileReport;
use crate::types::scoring::{MetricData, MetricKey, Score};
use crate::types::timeline::{ProfileInput, YearData};
use activity::ActivityResult;
use chrono::{DateTime, Utc};
use collaboration::CollaborationResult;
use consistency::ConsistencyResult;
use growth::GrowthResult;
use impact::ImpactResult;
use quality::QualityResult;
use serde::Serialize;

pub use activity::calculate_activity;
pub use categories::{calculate_category_score, get_category_scores};
pub use collaboration::calculate_collaboration;
pub use consistency::calculate_consistency;
pub use growth::calculate_growth;
pub use impact::calculate_impact;
pub use quality::calculate_quality;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllMetrics {
    pub activity: ActivityResult,
    pub impact: ImpactResult,
    pub quality: QualityResult,
    pub growth: GrowthResult,
    pub consistency: ConsistencyResult,
    pub collaboration: CollaborationResult,
    /// Computed outside this crate, if at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticity: Option<MetricData>,
}

impl AllMetrics {
    pub fn score(&self, key: MetricKey) -> Score {
        match key {
            MetricKey::Activity => self.activity.score,
            MetricKey::Impact => self.impact.score,
            MetricKey::Quality => self.quality.score,
            MetricKey::Growth => self.growth.score,
            MetricKey::Consistency => self.consistency.score,
            MetricKey::Collaboration => self.collaboration.score,
            MetricKey::Authenticity => self
                .authenticity
                .as_ref()
                .map(|authenticity| authenticity.score)
                .unwrap_or(0),
        }
    }

    pub fn metric_data(&self, key: MetricKey) -> MetricData {
        match key {
            MetricKey::Activity => self.activity.to_data(key),
            MetricKey::Impact => self.impact.to_data(key),
            MetricKey::Quality => self.quality.to_data(key),
            MetricKey::Growth => self.growth.to_data(key),
            MetricKey::Consistency => self.consistency.to_data(key),
            MetricKey::Collaboration => self.collaboration.to_data(key),
            MetricKey::Authenticity => self
                .authenticity
                .clone()
                .unwrap_or_else(|| MetricData::unavailable(key)),
        }
    }
}

/// Runs all six calculators. `now` is only read by the quality calculator.
pub fn calculate_all(timeline: &[YearData], now: DateTime<Utc>) -> AllMetrics {
    AllMetrics {
        activity: calculate_activity(timeline),
        impact: calculate_impact(timeline),
        quality: calculate_quality(timeline, now),
        growth: calculate_growth(timeline),
        consistency: calculate_consistency(timeline),
        collaboration: calculate_collaboration(timeline),
        authenticity: None,
    }
}

pub fn analyze(input: &ProfileInput, now: DateTime<Utc>) -> ProfileReport {
    tracing::info!(
        login = input.login.as_deref().unwrap_or("unknown"),
        years = input.timeline.len(),
        "scoring timeline"
    );
    let metrics = calculate_all(&input.timeline, now);
    let categories = get_category_scores(&metrics);

    ProfileReport {
        login: input.login.clone(),
        generated_at: now,
        metrics,
        categories,
    }
}
