use crate::error::{Result, ScoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One user's analyzed history, one entry per year with recorded activity.
pub type Timeline = Vec<YearData>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearData {
    pub year: i32,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub total_issues: u64,
    #[serde(default, rename = "totalPRs")]
    pub total_prs: u64,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub owned_repos: Vec<RepositoryContribution>,
    #[serde(default)]
    pub contributions: Vec<RepositoryContribution>,
}

impl YearData {
    /// Owned repositories followed by contributed ones, in list order.
    pub fn all_repos(&self) -> impl Iterator<Item = &RepositoryContribution> {
        self.owned_repos.iter().chain(self.contributions.iter())
    }

    pub fn is_active(&self) -> bool {
        self.total_commits > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryContribution {
    #[serde(default)]
    pub contributions: ContributionCount,
    pub repository: Repository,
}

impl RepositoryContribution {
    pub fn commits(&self) -> u64 {
        self.contributions.total_count
    }

    pub fn url(&self) -> &str {
        &self.repository.url
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCount {
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub stargazer_count: u64,
    #[serde(default)]
    pub fork_count: u64,
    #[serde(default)]
    pub is_fork: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub primary_language: Option<Language>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Repository {
    pub fn language(&self) -> Option<&str> {
        self.primary_language
            .as_ref()
            .map(|language| language.name.as_str())
    }

    pub fn is_documented(&self) -> bool {
        self.description
            .as_deref()
            .map(|description| !description.trim().is_empty())
            .unwrap_or(false)
    }

    /// Organization segment of `https://github.com/{org}/{repo}`.
    pub fn organization(&self) -> Option<&str> {
        self.url
            .split('/')
            .nth(3)
            .filter(|segment| !segment.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

/// Input document: either `{ "login": ..., "timeline": [...] }` or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TimelineDocument {
    Profile {
        #[serde(default)]
        login: Option<String>,
        timeline: Timeline,
    },
    Bare(Timeline),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileInput {
    pub login: Option<String>,
    pub timeline: Timeline,
}

pub fn parse_timeline(content: &str) -> Result<ProfileInput> {
    parse_document(content).map_err(|e| ScoreError::InputParse(e.to_string()))
}

pub fn load_timeline(path: &Path) -> Result<ProfileInput> {
    if !path.exists() {
        return Err(ScoreError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
        .map_err(|e| ScoreError::InputParse(format!("{}: {}", path.display(), e)))
}

fn parse_document(content: &str) -> serde_json::Result<ProfileInput> {
    let document: TimelineDocument = serde_json::from_str(content)?;
    Ok(match document {
        TimelineDocument::Profile { login, timeline } => ProfileInput { login, timeline },
        TimelineDocument::Bare(timeline) => ProfileInput {
            login: None,
            timeline,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile_document_with_graphql_shape() {
        let content = r#"
{
  "login": "octocat",
  "timeline": [
    {
      "year": 2025,
      "totalCommits": 120,
      "totalPRs": 4,
      "ownedRepos": [
        {
          "contributions": { "totalCount": 30 },
          "repository": {
            "url": "https://github.com/octocat/hello",
            "name": "hello",
            "owner": { "login": "octocat" },
            "stargazerCount": 12,
            "forkCount": 3,
            "isFork": false,
            "primaryLanguage": { "name": "Rust" },
            "description": "greeting",
            "createdAt": "2020-01-01T00:00:00Z"
          }
        }
      ]
    }
  ]
}
"#;
        let input = parse_timeline(content).expect("profile document should parse");
        assert_eq!(input.login.as_deref(), Some("octocat"));
        let year = &input.timeline[0];
        assert_eq!(year.total_commits, 120);
        assert_eq!(year.total_prs, 4);
        assert_eq!(year.total_issues, 0);
        assert!(year.contributions.is_empty());
        let repo = &year.owned_repos[0];
        assert_eq!(repo.commits(), 30);
        assert_eq!(repo.repository.language(), Some("Rust"));
        assert!(repo.repository.created_at.is_some());
    }

    #[test]
    fn parse_bare_array_document() {
        let input = parse_timeline(r#"[{"year": 2024}, {"year": 2023, "totalCommits": 5}]"#)
            .expect("bare array should parse");
        assert!(input.login.is_none());
        assert_eq!(input.timeline.len(), 2);
        assert_eq!(input.timeline[1].total_commits, 5);
    }

    #[test]
    fn parse_rejects_malformed_document() {
        let err = parse_timeline(r#"{"timeline": "nope"}"#).expect_err("should fail");
        assert!(err.to_string().contains("timeline parse error"));
    }

    #[test]
    fn null_language_and_blank_description_are_absent() {
        let repo: Repository = serde_json::from_str(
            r#"{"url": "https://github.com/a/b", "primaryLanguage": null, "description": "   "}"#,
        )
        .expect("repository should parse");
        assert_eq!(repo.language(), None);
        assert!(!repo.is_documented());
    }

    #[test]
    fn organization_is_fourth_url_segment() {
        let repo: Repository =
            serde_json::from_str(r#"{"url": "https://github.com/rust-lang/cargo"}"#)
                .expect("repository should parse");
        assert_eq!(repo.organization(), Some("rust-lang"));

        let malformed: Repository =
            serde_json::from_str(r#"{"url": "cargo"}"#).expect("repository should parse");
        assert_eq!(malformed.organization(), None);
    }
}
