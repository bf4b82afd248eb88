use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = i32;

/// Ordered label set attached to a metric score.
pub trait Label: Copy + Serialize {
    fn as_str(&self) -> &'static str;
}

/// Named integer sub-scores whose sum is the metric score.
pub trait Breakdown {
    fn components(&self) -> Vec<(&'static str, Score)>;

    fn total(&self) -> Score {
        self.components().iter().map(|(_, points)| points).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult<L, B, D> {
    pub score: Score,
    pub level: L,
    pub breakdown: B,
    pub details: D,
}

impl<L, B, D> MetricResult<L, B, D>
where
    L: Label,
    B: Breakdown + Serialize,
    D: Serialize,
{
    /// Builds a result whose score is the clamped breakdown total.
    pub fn from_breakdown(
        breakdown: B,
        details: D,
        bounds: (Score, Score),
        label: fn(Score) -> L,
    ) -> Self {
        let score = breakdown.total().clamp(bounds.0, bounds.1);
        Self {
            score,
            level: label(score),
            breakdown,
            details,
        }
    }

    pub fn to_data(&self, key: MetricKey) -> MetricData {
        MetricData {
            key,
            score: self.score,
            level: self.level.as_str().to_string(),
            breakdown: self
                .breakdown
                .components()
                .into_iter()
                .map(|(name, points)| (name.to_string(), points))
                .collect(),
            details: serde_json::to_value(&self.details).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
    Activity,
    Impact,
    Quality,
    Growth,
    Consistency,
    Collaboration,
    Authenticity,
}

impl MetricKey {
    pub const CALCULATED: [MetricKey; 6] = [
        MetricKey::Activity,
        MetricKey::Impact,
        MetricKey::Quality,
        MetricKey::Growth,
        MetricKey::Consistency,
        MetricKey::Collaboration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Activity => "activity",
            MetricKey::Impact => "impact",
            MetricKey::Quality => "quality",
            MetricKey::Growth => "growth",
            MetricKey::Consistency => "consistency",
            MetricKey::Collaboration => "collaboration",
            MetricKey::Authenticity => "authenticity",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        MetricKey::CALCULATED
            .into_iter()
            .chain([MetricKey::Authenticity])
            .find(|key| key.as_str() == normalized)
    }
}

/// Type-erased metric result, keyed by metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricData {
    pub key: MetricKey,
    pub score: Score,
    pub level: String,
    pub breakdown: BTreeMap<String, Score>,
    pub details: serde_json::Value,
}

impl MetricData {
    pub const UNAVAILABLE_LEVEL: &'static str = "Unavailable";

    /// Neutral stand-in for a metric that has no calculator.
    pub fn unavailable(key: MetricKey) -> Self {
        Self {
            key,
            score: 0,
            level: Self::UNAVAILABLE_LEVEL.to_string(),
            breakdown: BTreeMap::new(),
            details: serde_json::Value::Null,
        }
    }

    pub fn is_available(&self) -> bool {
        self.level != Self::UNAVAILABLE_LEVEL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Output,
    Quality,
    Trust,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Output, Category::Quality, Category::Trust];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Output => "OUTPUT",
            Category::Quality => "QUALITY",
            Category::Trust => "TRUST",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Output => "Output",
            Category::Quality => "Quality",
            Category::Trust => "Trust",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: Score,
    pub metrics: [MetricData; 2],
}
