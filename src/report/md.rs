use crate::types::report::ProfileReport;
use crate::types::scoring::{CategoryScore, MetricData, MetricKey};

pub fn to_markdown(report: &ProfileReport, include_categories: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Profile Report: {}\n\n",
        report.login.as_deref().unwrap_or("unknown")
    ));
    output.push_str(&format!(
        "Generated at: {}\n\n",
        report.generated_at.to_rfc3339()
    ));

    output.push_str("## Metrics\n\n");
    output.push_str("| Metric | Score | Level | Breakdown |\n");
    output.push_str("|---|---|---|---|\n");
    for key in MetricKey::CALCULATED {
        let metric = report.metrics.metric_data(key);
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            key.as_str(),
            metric.score,
            metric.level,
            breakdown_summary(&metric)
        ));
    }
    output.push('\n');

    if include_categories {
        output.push_str(&category_section(&report.categories));
    }

    output
}

pub fn metric_section(metric: &MetricData) -> String {
    let mut output = format!(
        "## {}\n\nScore: {} ({})\n\n",
        metric.key.as_str(),
        metric.score,
        metric.level
    );
    if metric.breakdown.is_empty() {
        output.push_str("- no breakdown\n");
    } else {
        for (name, points) in &metric.breakdown {
            output.push_str(&format!("- {name}: {points}\n"));
        }
    }
    output
}

pub fn category_section(categories: &[CategoryScore]) -> String {
    let mut output = String::from("## Categories\n\n");
    for category in categories {
        output.push_str(&format!(
            "- {}: {} ({} {}, {} {})\n",
            category.category.title(),
            category.score,
            category.metrics[0].key.as_str(),
            describe_score(&category.metrics[0]),
            category.metrics[1].key.as_str(),
            describe_score(&category.metrics[1]),
        ));
    }
    output
}

fn describe_score(metric: &MetricData) -> String {
    if metric.is_available() {
        metric.score.to_string()
    } else {
        "n/a".to_string()
    }
}

fn breakdown_summary(metric: &MetricData) -> String {
    metric
        .breakdown
        .iter()
        .map(|(name, points)| format!("{name} {points}"))
        .collect::<Vec<_>>()
        .join(", ")
}
