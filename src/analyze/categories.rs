use super::utils::round_half_up;
use super::AllMetrics;
use crate::types::scoring::{Category, CategoryScore, MetricKey, Score};

pub struct CategoryConfig {
    pub category: Category,
    pub metrics: [MetricKey; 2],
}

pub static CATEGORY_CONFIGS: [CategoryConfig; 3] = [
    CategoryConfig {
        category: Category::Output,
        metrics: [MetricKey::Activity, MetricKey::Impact],
    },
    CategoryConfig {
        category: Category::Quality,
        metrics: [MetricKey::Quality, MetricKey::Consistency],
    },
    CategoryConfig {
        category: Category::Trust,
        metrics: [MetricKey::Authenticity, MetricKey::Collaboration],
    },
];

pub fn category_config(category: Category) -> &'static CategoryConfig {
    match category {
        Category::Output => &CATEGORY_CONFIGS[0],
        Category::Quality => &CATEGORY_CONFIGS[1],
        Category::Trust => &CATEGORY_CONFIGS[2],
    }
}

/// Rounded mean of the category's two metric scores.
pub fn calculate_category_score(metrics: &AllMetrics, category: Category) -> Score {
    let [first, second] = category_config(category).metrics;
    round_half_up(f64::from(metrics.score(first) + metrics.score(second)) / 2.0)
}

/// Scores for OUTPUT, QUALITY and TRUST, in that order.
pub fn get_category_scores(metrics: &AllMetrics) -> Vec<CategoryScore> {
    CATEGORY_CONFIGS
        .iter()
        .map(|config| {
            let [first, second] = config.metrics;
            let score = calculate_category_score(metrics, config.category);
            tracing::debug!(category = config.category.as_str(), score, "category scored");
            CategoryScore {
                category: config.category,
                score,
                metrics: [metrics.metric_data(first), metrics.metric_data(second)],
            }
        })
        .collect()
}
