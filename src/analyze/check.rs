use crate::types::config::CheckSettings;
use crate::types::report::Finding;
use crate::types::timeline::YearData;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Flags timeline shapes the calculators accept but score misleadingly.
pub fn check_findings(
    timeline: &[YearData],
    now: DateTime<Utc>,
    settings: &CheckSettings,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if timeline.is_empty() {
        findings.push(Finding::warning(
            "timeline.empty",
            "Timeline is empty",
            "No yearly activity was recorded; every metric will score zero.".to_string(),
            None,
        ));
        return findings;
    }

    let mut occurrences = BTreeMap::<i32, usize>::new();
    for year in timeline {
        *occurrences.entry(year.year).or_default() += 1;
    }
    for (year, count) in occurrences.iter().filter(|(_, count)| **count > 1) {
        findings.push(Finding::blocking(
            "timeline.duplicate_year",
            "Year recorded more than once",
            format!("{year} appears {count} times; yearly totals would be double counted."),
            Some(*year),
        ));
    }

    if let [current, previous, ..] = timeline {
        if current.year < previous.year {
            findings.push(Finding::warning(
                "timeline.order",
                "Timeline is not ordered most recent first",
                format!(
                    "Growth compares the first two entries; {} is treated as the current year and {} as the previous one.",
                    current.year, previous.year
                ),
                Some(current.year),
            ));
        }
    }

    let years: Vec<i32> = occurrences.keys().copied().collect();
    for pair in years.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > settings.max_year_gap as i32 {
            findings.push(Finding::warning(
                "timeline.year_gap",
                "Gap between recorded years",
                format!(
                    "No activity recorded between {} and {}; streaks treat the two years as adjacent.",
                    pair[0], pair[1]
                ),
                Some(pair[1]),
            ));
        }
    }

    for year in timeline {
        for repo in year.all_repos() {
            if repo.url().trim().is_empty() {
                findings.push(Finding::blocking(
                    "repository.missing_url",
                    "Repository without URL",
                    format!(
                        "Repository '{}' has no URL and cannot be deduplicated.",
                        repo.repository.name
                    ),
                    Some(year.year),
                ));
            }
            if let Some(created_at) = repo.repository.created_at {
                if created_at > now {
                    findings.push(Finding::warning(
                        "repository.created_in_future",
                        "Repository created after the scoring clock",
                        format!(
                            "{} reports createdAt {} which is after {}.",
                            repo.url(),
                            created_at.to_rfc3339(),
                            now.to_rfc3339()
                        ),
                        Some(year.year),
                    ));
                }
            }
        }
        for repo in &year.contributions {
            if !repo.url().trim().is_empty() && repo.repository.organization().is_none() {
                findings.push(Finding::warning(
                    "repository.unparsable_url",
                    "Contributed repository URL has no organization",
                    format!(
                        "{} does not match https://github.com/{{org}}/{{repo}}; it is skipped when counting organizations.",
                        repo.url()
                    ),
                    Some(year.year),
                ));
            }
        }
    }

    tracing::debug!(findings = findings.len(), "timeline checked");
    findings
}
