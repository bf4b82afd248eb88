//! Timeline builders shared by the calculator tests.

use crate::types::timeline::{
    ContributionCount, Language, Owner, Repository, RepositoryContribution, YearData,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0)
        .single()
        .expect("fixed clock should be valid")
}

pub fn years_ago(years: i64) -> DateTime<Utc> {
    now() - Duration::days(years * 365 + 2)
}

pub fn year(year: i32, commits: u64) -> YearData {
    YearData {
        year,
        total_commits: commits,
        ..YearData::default()
    }
}

pub fn repo(url: &str, commits: u64) -> RepositoryContribution {
    let mut segments = url.rsplit('/');
    let name = segments.next().unwrap_or_default().to_string();
    let login = segments.next().unwrap_or_default().to_string();
    RepositoryContribution {
        contributions: ContributionCount {
            total_count: commits,
        },
        repository: Repository {
            url: url.to_string(),
            name,
            owner: Owner { login },
            stargazer_count: 0,
            fork_count: 0,
            is_fork: false,
            is_archived: false,
            is_private: false,
            primary_language: None,
            description: None,
            created_at: None,
        },
    }
}

pub fn language_repo(url: &str, language: &str) -> RepositoryContribution {
    repo(url, 1).language(language)
}

impl RepositoryContribution {
    pub fn stars(mut self, stars: u64) -> Self {
        self.repository.stargazer_count = stars;
        self
    }

    pub fn forks(mut self, forks: u64) -> Self {
        self.repository.fork_count = forks;
        self
    }

    pub fn fork(mut self) -> Self {
        self.repository.is_fork = true;
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.repository.primary_language = Some(Language {
            name: language.to_string(),
        });
        self
    }

    pub fn described(mut self, description: &str) -> Self {
        self.repository.description = Some(description.to_string());
        self
    }

    pub fn created(mut self, created_at: DateTime<Utc>) -> Self {
        self.repository.created_at = Some(created_at);
        self
    }
}
