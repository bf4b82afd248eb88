use crate::types::scoring::Score;
use crate::types::timeline::{RepositoryContribution, YearData};
use std::collections::{BTreeSet, HashSet};

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> Score {
    (value + 0.5).floor() as Score
}

/// Clamps a raw sub-score into its range, then rounds it.
pub fn points(raw: f64, min: f64, max: f64) -> Score {
    round_half_up(clamp(raw, min, max))
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Looks up the first `(threshold, value)` row whose threshold `value` reaches.
/// Rows must be ordered from the highest threshold down.
pub fn tiered<V, T>(value: V, table: &[(V, T)], fallback: T) -> T
where
    V: PartialOrd + Copy,
    T: Copy,
{
    table
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(fallback)
}

pub fn calculate_total_stars(year: &YearData) -> u64 {
    year.all_repos()
        .map(|repo| repo.repository.stargazer_count)
        .sum()
}

pub fn calculate_total_forks(year: &YearData) -> u64 {
    year.all_repos().map(|repo| repo.repository.fork_count).sum()
}

pub fn extract_languages(year: &YearData) -> BTreeSet<&str> {
    year.all_repos()
        .filter_map(|repo| repo.repository.language())
        .collect()
}

/// Most recent years covering roughly `months`; data is yearly, so the window
/// is whole years. Returns a sorted copy, the input order is left untouched.
pub fn get_last_n_months(timeline: &[YearData], months: u32) -> Vec<&YearData> {
    let years = if months <= 3 {
        1
    } else if months <= 12 {
        2
    } else {
        months.div_ceil(12) as usize
    };

    let mut sorted: Vec<&YearData> = timeline.iter().collect();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted.truncate(years);
    sorted
}

/// Dedupes by repository URL; the first occurrence wins and order is kept.
pub fn get_unique_repos<'a, I>(list: I) -> Vec<&'a RepositoryContribution>
where
    I: IntoIterator<Item = &'a RepositoryContribution>,
{
    let mut seen = HashSet::new();
    list.into_iter()
        .filter(|repo| seen.insert(repo.url()))
        .collect()
}

/// Unique owned and contributed repositories across the given years.
pub fn count_unique_repos<'a, I>(years: I) -> usize
where
    I: IntoIterator<Item = &'a YearData>,
{
    get_unique_repos(years.into_iter().flat_map(|year| year.all_repos())).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::fixtures::{language_repo, repo, year};

    #[test]
    fn clamp_is_two_sided() {
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(7.5, 0.0, 10.0), 7.5);
    }

    #[test]
    fn round_half_up_matches_dashboard_rounding() {
        assert_eq!(round_half_up(12.5), 13);
        assert_eq!(round_half_up(12.49), 12);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn tiered_reads_table_top_down() {
        let table = [(100, "gold"), (10, "silver"), (1, "bronze")];
        assert_eq!(tiered(150, &table, "none"), "gold");
        assert_eq!(tiered(100, &table, "none"), "gold");
        assert_eq!(tiered(99, &table, "none"), "silver");
        assert_eq!(tiered(0, &table, "none"), "none");
    }

    #[test]
    fn totals_cover_owned_and_contributed_repos() {
        let mut data = year(2025, 10);
        data.owned_repos.push(repo("https://github.com/me/a", 1).stars(10).forks(2));
        data.contributions
            .push(repo("https://github.com/org/b", 1).stars(5).forks(1));
        assert_eq!(calculate_total_stars(&data), 15);
        assert_eq!(calculate_total_forks(&data), 3);
    }

    #[test]
    fn extract_languages_skips_missing_language() {
        let mut data = year(2025, 10);
        data.owned_repos.push(language_repo("https://github.com/me/a", "Rust"));
        data.owned_repos.push(repo("https://github.com/me/b", 1));
        data.contributions
            .push(language_repo("https://github.com/org/c", "Rust"));
        data.contributions.push(language_repo("https://github.com/org/d", "Go"));
        let languages = extract_languages(&data);
        assert_eq!(languages.into_iter().collect::<Vec<_>>(), vec!["Go", "Rust"]);
    }

    #[test]
    fn last_n_months_windows_whole_years_without_reordering_input() {
        let timeline = vec![year(2022, 1), year(2025, 1), year(2023, 1), year(2024, 1)];

        let quarter = get_last_n_months(&timeline, 3);
        assert_eq!(quarter.iter().map(|y| y.year).collect::<Vec<_>>(), vec![2025]);

        let twelve = get_last_n_months(&timeline, 12);
        assert_eq!(
            twelve.iter().map(|y| y.year).collect::<Vec<_>>(),
            vec![2025, 2024]
        );

        let thirty = get_last_n_months(&timeline, 30);
        assert_eq!(thirty.len(), 3);

        assert_eq!(timeline[0].year, 2022);
    }

    #[test]
    fn unique_repos_dedupes_across_years_keeping_first() {
        let mut first = year(2024, 5);
        first.owned_repos.push(repo("https://github.com/me/a", 3));
        let mut second = year(2025, 5);
        second.owned_repos.push(repo("https://github.com/me/a", 9));
        second.contributions.push(repo("https://github.com/org/b", 1));

        let timeline = vec![first, second];
        assert_eq!(count_unique_repos(&timeline), 2);

        let unique = get_unique_repos(timeline.iter().flat_map(|y| y.owned_repos.iter()));
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].commits(), 3);
    }
}
